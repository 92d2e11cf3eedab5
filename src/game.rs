//! The N×N line-marking game

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use lines::{Line, LineAnalyzer, LineKind, all_lines};
