//! Time-bounded move search for the N×N line-marking game
//!
//! Two players take turns marking empty cells of an N×N board. The game ends
//! as soon as any row, column or main diagonal is fully marked, whoever
//! placed the last mark. This crate provides:
//! - Board model with line occupancy queries ([`game`])
//! - Terminal and heuristic evaluation ([`search::evaluation`])
//! - Alpha-beta minimax under a soft expansion budget and a hard deadline
//!   ([`search`])
//! - Rendering of the chosen move in the `.`/`x` board format ([`report`])
//!
//! # Quick Start
//!
//! ```
//! use linemark::{
//!     adapters::SystemClock,
//!     game::Board,
//!     report::Decision,
//!     search::{SearchConfig, Searcher, TimeBudget},
//! };
//!
//! let clock = SystemClock::start();
//! let board = Board::from_config(3, "......xx.")?;
//! let mut searcher = Searcher::new(clock, TimeBudget::from_secs(2.0)?, SearchConfig::default());
//! let outcome = searcher.search(&board)?;
//!
//! let decision = Decision::from_outcome("......xx.", 3, &outcome, clock.origin().elapsed())?;
//! assert_eq!(decision.to_string(), "x.....xx.");
//! # Ok::<(), linemark::Error>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod error;
pub mod game;
pub mod ports;
pub mod report;
pub mod search;

pub use error::{Error, Result};
pub use game::{Board, Cell, Player};
pub use report::Decision;
pub use search::{Completion, SearchConfig, SearchOutcome, Searcher, TimeBudget};
