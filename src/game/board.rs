//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{Line, LineAnalyzer, LineKind};

/// A cell on the board.
///
/// Both players place the same mark, so a cell only records whether it has
/// been marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Marked,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked => 'x',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::Marked),
            _ => None,
        }
    }
}

/// A player in the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Score multiplier from this player's point of view
    pub fn sign(self) -> i32 {
        match self {
            Player::Max => 1,
            Player::Min => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "max"),
            Player::Min => write!(f, "min"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "first" => Ok(Player::Max),
            "min" | "second" => Ok(Player::Min),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
                expected: "max, min".to_string(),
            }),
        }
    }
}

/// An N×N grid of cells addressed in row-major order.
///
/// Boards are values: [`Board::with_mark`] returns a new board and leaves the
/// receiver untouched, so sibling branches of the search never observe each
/// other's moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    ///
    /// # Errors
    ///
    /// Returns error if `size` is zero.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidBoardSize { size });
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Create a board from its `.`/`x` configuration string.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `size` is zero
    /// - The configuration is empty after trimming
    /// - The configuration does not hold exactly `size * size` cells
    /// - Any character is not a valid cell representation
    ///
    /// # Examples
    ///
    /// ```
    /// use linemark::game::{Board, Cell};
    ///
    /// let board = Board::from_config(3, "......xx.").unwrap();
    /// assert_eq!(board.get(6), Cell::Marked);
    /// assert_eq!(board.empty_positions(), vec![0, 1, 2, 3, 4, 5, 8]);
    /// ```
    pub fn from_config(size: usize, config: &str) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidBoardSize { size });
        }

        let trimmed = config.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::InvalidConfiguration {
                message: "empty configuration".to_string(),
            });
        }

        let chars: Vec<char> = trimmed.chars().collect();
        let expected = size * size;
        if chars.len() != expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: chars.len(),
                context: trimmed.to_string(),
            });
        }

        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: trimmed.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Board { size, cells })
    }

    /// Side length N of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at position
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Count the number of marked cells on the board.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Marked).count()
    }

    /// Get all empty positions in row-major order.
    ///
    /// The order is the child expansion order of the search, and therefore
    /// the tie-break between equally scored moves.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Mark a position and return the new board
    ///
    /// # Errors
    ///
    /// Returns error if the position is out of bounds or already marked.
    #[must_use = "with_mark returns a new board; the receiver is unchanged"]
    pub fn with_mark(&self, pos: usize) -> Result<Board, crate::Error> {
        if pos >= self.cells.len() {
            return Err(crate::Error::InvalidPosition {
                position: pos,
                cells: self.cells.len(),
            });
        }
        if self.cells[pos] != Cell::Empty {
            return Err(crate::Error::PositionOccupied { position: pos });
        }

        let mut next = self.clone();
        next.cells[pos] = Cell::Marked;
        Ok(next)
    }

    /// Number of empty cells on the line of `kind` through `pos`.
    ///
    /// Returns `None` when `pos` does not lie on the requested diagonal.
    pub fn line_empty_count(&self, pos: usize, kind: LineKind) -> Option<usize> {
        Line::through(pos, kind, self.size)
            .map(|line| LineAnalyzer::empty_count(&self.cells, self.size, line))
    }

    /// Check if any row, column or diagonal is fully marked
    pub fn is_terminal(&self) -> bool {
        self.completed_line().is_some()
    }

    /// The first fully marked line, if the game is over
    pub fn completed_line(&self) -> Option<Line> {
        LineAnalyzer::completed_line(&self.cells, self.size)
    }

    /// Encode the board as its single-line `.`/`x` configuration string
    pub fn to_config(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(self.size) && i + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell_count(), 16);
        assert_eq!(board.empty_positions().len(), 16);
        assert!(!board.is_terminal());

        assert!(matches!(
            Board::new(0),
            Err(crate::Error::InvalidBoardSize { size: 0 })
        ));
    }

    #[test]
    fn test_from_config() {
        let board = Board::from_config(3, "  x...x....  ").unwrap();
        assert_eq!(board.get(0), Cell::Marked);
        assert_eq!(board.get(4), Cell::Marked);
        assert_eq!(board.marked_count(), 2);

        let upper = Board::from_config(2, "X..X").unwrap();
        assert_eq!(upper.to_config(), "x..x");
    }

    #[test]
    fn test_from_config_rejects_empty() {
        let err = Board::from_config(3, "   ").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_config_rejects_wrong_length() {
        let err = Board::from_config(3, "....").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_from_config_rejects_bad_character() {
        let err = Board::from_config(2, "..o.").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: 'o',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_with_mark() {
        let board = Board::new(3).unwrap();

        let marked = board.with_mark(4).unwrap();
        assert_eq!(marked.get(4), Cell::Marked);
        // Source board unchanged
        assert_eq!(board.get(4), Cell::Empty);

        let result = marked.with_mark(4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already marked"));

        assert!(matches!(
            board.with_mark(9),
            Err(crate::Error::InvalidPosition {
                position: 9,
                cells: 9
            })
        ));
    }

    #[test]
    fn test_empty_positions_row_major() {
        let board = Board::from_config(3, "x.x.x.x.x").unwrap();
        assert_eq!(board.empty_positions(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_line_empty_count() {
        // x . .
        // . x .
        // . . .
        let board = Board::from_config(3, "x...x....").unwrap();

        assert_eq!(board.line_empty_count(0, LineKind::Row), Some(2));
        assert_eq!(board.line_empty_count(0, LineKind::Column), Some(2));
        assert_eq!(board.line_empty_count(0, LineKind::MainDiagonal), Some(1));
        assert_eq!(board.line_empty_count(0, LineKind::AntiDiagonal), None);

        assert_eq!(board.line_empty_count(4, LineKind::AntiDiagonal), Some(2));
        assert_eq!(board.line_empty_count(5, LineKind::MainDiagonal), None);
        assert_eq!(board.line_empty_count(7, LineKind::Column), Some(2));
    }

    #[test]
    fn test_terminal_detection() {
        assert!(Board::from_config(3, "xxx......").unwrap().is_terminal());
        assert!(Board::from_config(3, "...xxx...").unwrap().is_terminal());
        assert!(Board::from_config(3, "x..x..x..").unwrap().is_terminal());
        assert!(Board::from_config(3, "x...x...x").unwrap().is_terminal());
        assert!(Board::from_config(3, "..x.x.x..").unwrap().is_terminal());

        // Full board without an empty line is still terminal
        assert!(Board::from_config(3, "xxxxxxxxx").unwrap().is_terminal());

        assert!(!Board::from_config(3, "xx.x...x.").unwrap().is_terminal());
        assert!(!Board::from_config(3, ".........").unwrap().is_terminal());
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::from_config(1, ".").unwrap();
        assert!(!board.is_terminal());

        let marked = board.with_mark(0).unwrap();
        assert!(marked.is_terminal());
    }

    #[test]
    fn test_display() {
        let board = Board::from_config(3, "x...x...x").unwrap();
        assert_eq!(board.to_string(), "x..\n.x.\n..x");
    }

    #[test]
    fn test_player_alternation() {
        assert_eq!(Player::Max.opponent(), Player::Min);
        assert_eq!(Player::Min.opponent(), Player::Max);
        assert_eq!(Player::Max.sign(), 1);
        assert_eq!(Player::Min.sign(), -1);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("max".parse::<Player>().unwrap(), Player::Max);
        assert_eq!(" MIN ".parse::<Player>().unwrap(), Player::Min);
        assert_eq!("second".parse::<Player>().unwrap(), Player::Min);
        assert!("x".parse::<Player>().is_err());
        assert_eq!(Player::Min.to_string(), "min");
    }
}
