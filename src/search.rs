//! Time-bounded adversarial search

pub mod config;
pub mod engine;
pub mod evaluation;
pub mod governor;

pub use config::{DEFAULT_HARD_MARGIN_MS, DEFAULT_SOFT_FRACTION, SearchConfig, TimeBudget};
pub use engine::{Completion, Scored, SearchOutcome, SearchStats, Searcher};
pub use evaluation::{
    BoardAnalysis, LineOccupancy, evaluate_heuristic, evaluate_terminal, win_score,
};
pub use governor::TimeGovernor;
