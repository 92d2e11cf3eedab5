//! Error types for the linemark crate

use thiserror::Error;

/// Main error type for the linemark crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("the game is over: a line is already fully marked in '{config}'")]
    AlreadyTerminal { config: String },

    #[error("hard deadline exceeded after {elapsed_ms:.3} ms")]
    DeadlineExceeded { elapsed_ms: f64 },

    #[error("board size must be at least 1, got {size}")]
    InvalidBoardSize { size: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("time budget must be a positive, finite number of seconds, got {seconds}")]
    InvalidTimeBudget { seconds: f64 },

    #[error("position {position} is out of bounds (board has {cells} cells)")]
    InvalidPosition { position: usize, cells: usize },

    #[error("invalid move: position {position} is already marked")]
    PositionOccupied { position: usize },

    #[error("invalid player '{input}'. Expected one of: {expected}")]
    ParsePlayer { input: String, expected: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
