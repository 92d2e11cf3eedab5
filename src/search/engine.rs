//! Alpha-beta minimax search under a soft and a hard time cutoff
//!
//! The searcher expands the tree depth-first in row-major move order. Every
//! call polls the [`TimeGovernor`]:
//!
//! - once the **soft** budget is used up, leaves are scored with the
//!   heuristic instead of being expanded, and the tree rolls up normally;
//! - once the **hard** deadline passes, the call returns
//!   [`Error::DeadlineExceeded`], which `?` carries through every pending
//!   frame to [`Searcher::search`]. That then answers with the best move
//!   recorded so far.
//!
//! # Example
//!
//! ```
//! use linemark::{
//!     adapters::SystemClock,
//!     game::Board,
//!     search::{SearchConfig, Searcher, TimeBudget},
//! };
//!
//! let board = Board::from_config(3, "......xx.")?;
//! let mut searcher = Searcher::new(
//!     SystemClock::start(),
//!     TimeBudget::from_secs(2.0)?,
//!     SearchConfig::default(),
//! );
//!
//! let outcome = searcher.search(&board)?;
//! assert!(board.is_empty(outcome.position));
//! # Ok::<(), linemark::Error>(())
//! ```

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::{
    config::{SearchConfig, TimeBudget},
    evaluation::{evaluate_heuristic, evaluate_terminal},
    governor::TimeGovernor,
};
use crate::{
    Error, Result,
    game::{Board, Player},
    ports::Clock,
};

/// Score of a node and the move that achieved it.
///
/// `position` is `None` for leaves (terminal or heuristic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub score: i32,
    pub position: Option<usize>,
}

impl Scored {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    /// The tree rolled up to the root, possibly through heuristic leaves
    Finished,
    /// The hard deadline fired and the best recorded move was used
    DeadlineExceeded,
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls to the recursive search, root included
    pub nodes: u64,
    /// Nodes whose remaining children were skipped by alpha-beta
    pub prunes: u64,
    pub terminal_evaluations: u64,
    /// Leaves scored by the heuristic after the soft cutoff
    pub heuristic_evaluations: u64,
    /// Deepest ply entered
    pub max_depth: usize,
}

/// Result of a top-level search
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Chosen move; always an empty cell of the searched board
    pub position: usize,
    /// Root score, absent when the hard deadline fired
    pub score: Option<i32>,
    pub completion: Completion,
    pub stats: SearchStats,
    /// Clock reading at the last search call, in milliseconds
    pub elapsed_ms: f64,
}

/// Search context: clock budgets, the best-move fallback and statistics.
///
/// A searcher is meant for a single [`Searcher::search`]; its soft budget is
/// spent as the search runs and is not replenished.
#[derive(Debug)]
pub struct Searcher<C> {
    governor: TimeGovernor<C>,
    config: SearchConfig,
    best_move: Option<usize>,
    stats: SearchStats,
}

impl<C: Clock> Searcher<C> {
    pub fn new(clock: C, budget: TimeBudget, config: SearchConfig) -> Self {
        Self {
            governor: TimeGovernor::new(clock, budget, &config),
            config,
            best_move: None,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Latest move that improved a Max node's bound
    pub fn best_move(&self) -> Option<usize> {
        self.best_move
    }

    /// Choose a move for `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyTerminal`] if a line of `board` is already
    /// fully marked, and [`Error::InvalidConfiguration`] if the search
    /// settings are unusable. Reaching the hard deadline is not an error: the
    /// outcome then carries the best recorded move and
    /// [`Completion::DeadlineExceeded`].
    pub fn search(&mut self, board: &Board) -> Result<SearchOutcome> {
        self.config.validate()?;

        if board.is_terminal() {
            return Err(Error::AlreadyTerminal {
                config: board.to_config(),
            });
        }

        // A non-terminal board has an empty cell on every line
        let fallback = board.empty_positions().first().copied().ok_or_else(|| {
            Error::InvalidConfiguration {
                message: "board has no empty cells".to_string(),
            }
        })?;
        self.best_move = Some(fallback);

        let player = self.config.first_player;
        info!(
            "Board: {} size: {} player: {} soft budget: {} ms hard deadline: {} ms",
            board.to_config(),
            board.size(),
            player,
            self.governor.remaining_soft_ms(),
            self.governor.hard_deadline_ms(),
        );

        let result = self.search_node(board, player, i32::MIN, i32::MAX, 0);
        let elapsed_ms = self.governor.elapsed_ms();

        let (position, score, completion) = match result {
            Ok(scored) => (
                scored.position.unwrap_or(fallback),
                Some(scored.score),
                Completion::Finished,
            ),
            Err(Error::DeadlineExceeded { elapsed_ms }) => {
                let position = self.best_move.unwrap_or(fallback);
                warn!(elapsed_ms, position, "hard deadline reached, returning best move so far");
                (position, None, Completion::DeadlineExceeded)
            }
            Err(err) => return Err(err),
        };

        debug!(
            nodes = self.stats.nodes,
            prunes = self.stats.prunes,
            terminal = self.stats.terminal_evaluations,
            heuristic = self.stats.heuristic_evaluations,
            max_depth = self.stats.max_depth,
            "search finished"
        );

        Ok(SearchOutcome {
            position,
            score,
            completion,
            stats: self.stats.clone(),
            elapsed_ms,
        })
    }

    /// Recursive alpha-beta minimax.
    ///
    /// `player` moves next on `board`. Max nodes return their final alpha,
    /// Min nodes their final beta. Bounds only move on strict improvement, so
    /// among equally scored moves the earliest in row-major order wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeadlineExceeded`] as soon as the hard deadline has
    /// passed.
    pub fn search_node(
        &mut self,
        board: &Board,
        player: Player,
        mut alpha: i32,
        mut beta: i32,
        depth: usize,
    ) -> Result<Scored> {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.governor.tick();

        if self.governor.has_hard_deadline_passed() {
            return Err(Error::DeadlineExceeded {
                elapsed_ms: self.governor.elapsed_ms(),
            });
        }

        if board.is_terminal() {
            trace!(depth, "game over reached");
            self.stats.terminal_evaluations += 1;
            return Ok(Scored::leaf(evaluate_terminal(player, depth, board.size())));
        }

        if self.governor.should_stop_expanding() {
            trace!(depth, "soft cutoff, rolling up");
            self.stats.heuristic_evaluations += 1;
            return Ok(Scored::leaf(evaluate_heuristic(board, player)));
        }

        let mut position = None;
        for pos in board.empty_positions() {
            let child = board.with_mark(pos)?;
            let score = self
                .search_node(&child, player.opponent(), alpha, beta, depth + 1)?
                .score;

            match player {
                Player::Max => {
                    if score > alpha {
                        alpha = score;
                        position = Some(pos);
                        self.best_move = Some(pos);
                    }
                }
                Player::Min => {
                    if score < beta {
                        beta = score;
                        position = Some(pos);
                    }
                }
            }

            if alpha >= beta {
                self.stats.prunes += 1;
                break;
            }
        }

        let score = match player {
            Player::Max => alpha,
            Player::Min => beta,
        };
        Ok(Scored { score, position })
    }
}
