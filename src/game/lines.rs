//! Line geometry and occupancy analysis for the N×N board

use serde::{Deserialize, Serialize};

use super::Cell;

/// The four kinds of line that can end the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl LineKind {
    pub const ALL: [LineKind; 4] = [
        LineKind::Row,
        LineKind::Column,
        LineKind::MainDiagonal,
        LineKind::AntiDiagonal,
    ];

    pub fn is_diagonal(self) -> bool {
        matches!(self, LineKind::MainDiagonal | LineKind::AntiDiagonal)
    }
}

/// A single row, column or diagonal of a board of a given size.
///
/// `index` is the row or column number; it is always 0 for diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub index: usize,
}

impl Line {
    /// The line of `kind` passing through `pos`, if there is one.
    ///
    /// Rows and columns always exist. Diagonals only pass through the cells
    /// lying on them.
    pub fn through(pos: usize, kind: LineKind, size: usize) -> Option<Line> {
        let (row, col) = (pos / size, pos % size);
        match kind {
            LineKind::Row => Some(Line { kind, index: row }),
            LineKind::Column => Some(Line { kind, index: col }),
            LineKind::MainDiagonal if row == col => Some(Line { kind, index: 0 }),
            LineKind::AntiDiagonal if col == size - row - 1 => Some(Line { kind, index: 0 }),
            _ => None,
        }
    }

    /// Positions covered by this line, in row-major order
    pub fn positions(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |i| match self.kind {
            LineKind::Row => self.index * size + i,
            LineKind::Column => i * size + self.index,
            LineKind::MainDiagonal => i * size + i,
            LineKind::AntiDiagonal => i * size + (size - i - 1),
        })
    }
}

/// Every line of a board of the given size: rows, then columns, then both diagonals
pub fn all_lines(size: usize) -> impl Iterator<Item = Line> {
    let rows = (0..size).map(|index| Line {
        kind: LineKind::Row,
        index,
    });
    let columns = (0..size).map(|index| Line {
        kind: LineKind::Column,
        index,
    });
    let diagonals = [LineKind::MainDiagonal, LineKind::AntiDiagonal]
        .into_iter()
        .map(|kind| Line { kind, index: 0 });
    rows.chain(columns).chain(diagonals)
}

/// Utility for analyzing line occupancy
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Number of empty cells remaining on `line`
    pub fn empty_count(cells: &[Cell], size: usize, line: Line) -> usize {
        line.positions(size)
            .filter(|&pos| cells[pos] == Cell::Empty)
            .count()
    }

    /// Check whether every cell of `line` is marked
    pub fn is_complete(cells: &[Cell], size: usize, line: Line) -> bool {
        line.positions(size).all(|pos| cells[pos] == Cell::Marked)
    }

    /// Find the first fully marked line, if any
    pub fn completed_line(cells: &[Cell], size: usize) -> Option<Line> {
        all_lines(size).find(|&line| Self::is_complete(cells, size, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> Vec<Cell> {
        s.chars().map(|c| Cell::from_char(c).unwrap()).collect()
    }

    #[test]
    fn test_line_positions() {
        let row = Line {
            kind: LineKind::Row,
            index: 1,
        };
        assert_eq!(row.positions(3).collect::<Vec<_>>(), vec![3, 4, 5]);

        let column = Line {
            kind: LineKind::Column,
            index: 2,
        };
        assert_eq!(column.positions(3).collect::<Vec<_>>(), vec![2, 5, 8]);

        let main = Line {
            kind: LineKind::MainDiagonal,
            index: 0,
        };
        assert_eq!(main.positions(4).collect::<Vec<_>>(), vec![0, 5, 10, 15]);

        let anti = Line {
            kind: LineKind::AntiDiagonal,
            index: 0,
        };
        assert_eq!(anti.positions(4).collect::<Vec<_>>(), vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_all_lines_count() {
        assert_eq!(all_lines(1).count(), 4);
        assert_eq!(all_lines(3).count(), 8);
        assert_eq!(all_lines(5).count(), 12);
    }

    #[test]
    fn test_diagonals_only_through_their_cells() {
        // Center of 3x3 is on both diagonals
        assert!(Line::through(4, LineKind::MainDiagonal, 3).is_some());
        assert!(Line::through(4, LineKind::AntiDiagonal, 3).is_some());

        // Corners are on exactly one
        assert!(Line::through(0, LineKind::MainDiagonal, 3).is_some());
        assert!(Line::through(0, LineKind::AntiDiagonal, 3).is_none());
        assert!(Line::through(2, LineKind::AntiDiagonal, 3).is_some());
        assert!(Line::through(2, LineKind::MainDiagonal, 3).is_none());

        // Edges are on neither
        assert!(Line::through(1, LineKind::MainDiagonal, 3).is_none());
        assert!(Line::through(1, LineKind::AntiDiagonal, 3).is_none());
    }

    #[test]
    fn test_empty_count() {
        // x . x
        // . . .
        // x . .
        let cells = cells_from("x.x...x..");
        let top = Line {
            kind: LineKind::Row,
            index: 0,
        };
        let left = Line {
            kind: LineKind::Column,
            index: 0,
        };
        let anti = Line {
            kind: LineKind::AntiDiagonal,
            index: 0,
        };
        assert_eq!(LineAnalyzer::empty_count(&cells, 3, top), 1);
        assert_eq!(LineAnalyzer::empty_count(&cells, 3, left), 1);
        assert_eq!(LineAnalyzer::empty_count(&cells, 3, anti), 1);
    }

    #[test]
    fn test_completed_line() {
        assert_eq!(LineAnalyzer::completed_line(&cells_from("........."), 3), None);

        let column = LineAnalyzer::completed_line(&cells_from(".x..x..x."), 3);
        assert_eq!(
            column,
            Some(Line {
                kind: LineKind::Column,
                index: 1
            })
        );

        let anti = LineAnalyzer::completed_line(&cells_from("..x.x.x.."), 3);
        assert_eq!(anti.map(|line| line.kind), Some(LineKind::AntiDiagonal));
    }
}
