//! Rendering a chosen move in the external board format

use std::{fmt, time::Duration};

use serde::Serialize;

use crate::{
    Error, Result,
    search::{Completion, SearchOutcome},
};

/// 1-based column of a position, as reported to the caller
pub fn column_of(position: usize, size: usize) -> usize {
    position % size + 1
}

/// 1-based row of a position, as reported to the caller
pub fn row_of(position: usize, size: usize) -> usize {
    position / size + 1
}

/// The engine's answer, ready to print.
///
/// Displays as the new configuration string: the input with the chosen
/// position turned from `.` to `x`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use linemark::report::Decision;
///
/// let decision = Decision::for_position("......xx.", 3, 0, Duration::from_millis(5))?;
/// assert_eq!(decision.to_string(), "x.....xx.");
/// assert_eq!((decision.column, decision.row), (1, 1));
/// # Ok::<(), linemark::Error>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub size: usize,
    pub position: usize,
    pub column: usize,
    pub row: usize,
    pub configuration: String,
    pub score: Option<i32>,
    pub deadline_exceeded: bool,
    pub elapsed_seconds: f64,
}

impl Decision {
    /// Build the decision for a finished search.
    ///
    /// `elapsed` is the wall time to report, normally measured from process start.
    ///
    /// # Errors
    ///
    /// Returns error if the outcome's position is not an empty cell of
    /// `initial_config`.
    pub fn from_outcome(
        initial_config: &str,
        size: usize,
        outcome: &SearchOutcome,
        elapsed: Duration,
    ) -> Result<Self> {
        let mut decision = Self::for_position(initial_config, size, outcome.position, elapsed)?;
        decision.score = outcome.score;
        decision.deadline_exceeded = outcome.completion == Completion::DeadlineExceeded;
        Ok(decision)
    }

    /// Build a decision for an explicit position.
    ///
    /// # Errors
    ///
    /// Returns error if `position` is out of bounds or not `.` in `initial_config`.
    pub fn for_position(
        initial_config: &str,
        size: usize,
        position: usize,
        elapsed: Duration,
    ) -> Result<Self> {
        let mut cells: Vec<char> = initial_config.trim().chars().collect();
        match cells.get(position).copied() {
            None => {
                return Err(Error::InvalidPosition {
                    position,
                    cells: cells.len(),
                });
            }
            Some('.') => cells[position] = 'x',
            Some(_) => return Err(Error::PositionOccupied { position }),
        }

        Ok(Self {
            size,
            position,
            column: column_of(position, size),
            row: row_of(position, size),
            configuration: cells.into_iter().collect(),
            score: None,
            deadline_exceeded: false,
            elapsed_seconds: elapsed.as_secs_f64(),
        })
    }

    /// Human-readable summary line for the log
    pub fn summary(&self) -> String {
        format!(
            "Next move is column : {} Row: {} time {:.4} seconds",
            self.column, self.row, self.elapsed_seconds
        )
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchStats;

    fn outcome(position: usize, completion: Completion) -> SearchOutcome {
        SearchOutcome {
            position,
            score: Some(2700),
            completion,
            stats: SearchStats::default(),
            elapsed_ms: 1.0,
        }
    }

    #[test]
    fn test_render_marks_exactly_one_cell() {
        let decision = Decision::for_position("......xx.", 3, 8, Duration::ZERO).unwrap();
        assert_eq!(decision.configuration, "......xxx");

        let changed = "......xx."
            .chars()
            .zip(decision.configuration.chars())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_row_and_column_numbering() {
        let decision = Decision::for_position("x..x..x.x....x..", 4, 5, Duration::ZERO).unwrap();
        assert_eq!(decision.column, 2);
        assert_eq!(decision.row, 2);
        assert_eq!(decision.configuration, "x..x.xx.x....x..");

        assert_eq!(column_of(2, 7), 3);
        assert_eq!(row_of(2, 7), 1);
        assert_eq!(column_of(8, 3), 3);
        assert_eq!(row_of(8, 3), 3);
    }

    #[test]
    fn test_rejects_marked_or_missing_position() {
        assert!(matches!(
            Decision::for_position("x........", 3, 0, Duration::ZERO),
            Err(Error::PositionOccupied { position: 0 })
        ));
        assert!(matches!(
            Decision::for_position("x........", 3, 9, Duration::ZERO),
            Err(Error::InvalidPosition {
                position: 9,
                cells: 9
            })
        ));
    }

    #[test]
    fn test_from_outcome() {
        let decision = Decision::from_outcome(
            " ......xx. ",
            3,
            &outcome(0, Completion::DeadlineExceeded),
            Duration::from_millis(1500),
        )
        .unwrap();

        assert_eq!(decision.to_string(), "x.....xx.");
        assert_eq!(decision.score, Some(2700));
        assert!(decision.deadline_exceeded);
        assert_eq!(
            decision.summary(),
            "Next move is column : 1 Row: 1 time 1.5000 seconds"
        );
    }

    #[test]
    fn test_json() {
        let decision = Decision::from_outcome(
            "......xx.",
            3,
            &outcome(4, Completion::Finished),
            Duration::ZERO,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&decision.to_json().unwrap()).unwrap();

        assert_eq!(value["configuration"], "....x.xx.");
        assert_eq!(value["column"], 2);
        assert_eq!(value["row"], 2);
        assert_eq!(value["deadline_exceeded"], false);
    }
}
