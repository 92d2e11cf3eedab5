//! Terminal and heuristic board evaluation.
//!
//! Terminal scores are `±N²·300`, far outside anything the heuristic can
//! produce, so a decided line always outranks an estimate.
//!
//! The heuristic walks every empty cell and scores each line through it by
//! how many empty cells that line has left:
//!
//! | remaining | row / column       | diagonal            |
//! |-----------|--------------------|---------------------|
//! | 1         | `+30·sign`         | `+30`               |
//! | 2         | `−20·sign`         | `−20`               |
//! | odd       | `+5·sign`          | `+5·sign`           |
//! | even      | `−5·sign`          | `−5`                |
//!
//! where `sign` is `+1` for Max and `−1` for Min. Diagonal terms keep a fixed
//! sign except for the odd-parity bonus. Move selection depends on this
//! asymmetry, and the tests pin it down.

use serde::Serialize;

use crate::game::{Board, Line, LineAnalyzer, LineKind, Player, all_lines};

/// Terminal magnitude per board cell
pub const WIN_SCORE_PER_CELL: i32 = 300;

const COMPLETES_LINE: i32 = 30;
const TWO_REMAINING: i32 = 20;
const PARITY: i32 = 5;

/// Magnitude of a decided game on a board of the given size.
///
/// Saturates at `i32::MAX` for boards too large to score exactly.
pub fn win_score(size: usize) -> i32 {
    size
        .checked_mul(size)
        .and_then(|cells| i32::try_from(cells).ok())
        .and_then(|cells| cells.checked_mul(WIN_SCORE_PER_CELL))
        .unwrap_or(i32::MAX)
}

/// Score a terminal board.
///
/// `player` is the player who would move next on the terminal board, i.e.
/// the opponent of whoever completed the line. Losses for Max are offset by
/// `depth` so that, among lost positions, the one lost latest scores highest.
pub fn evaluate_terminal(player: Player, depth: usize, size: usize) -> i32 {
    match player {
        Player::Max => win_score(size),
        Player::Min => {
            (-win_score(size)).saturating_add(i32::try_from(depth).unwrap_or(i32::MAX))
        }
    }
}

/// Score a non-terminal board from `player`'s point of view.
pub fn evaluate_heuristic(board: &Board, player: Player) -> i32 {
    let sign = player.sign();
    board
        .empty_positions()
        .into_iter()
        .map(|pos| {
            LineKind::ALL
                .into_iter()
                .filter_map(|kind| {
                    board
                        .line_empty_count(pos, kind)
                        .map(|remaining| axis_score(remaining, sign, kind.is_diagonal()))
                })
                .sum::<i32>()
        })
        .sum()
}

fn axis_score(remaining: usize, sign: i32, diagonal: bool) -> i32 {
    let line_sign = if diagonal { 1 } else { sign };

    let proximity = match remaining {
        1 => COMPLETES_LINE * line_sign,
        2 => -TWO_REMAINING * line_sign,
        _ => 0,
    };

    let parity = if remaining.is_multiple_of(2) {
        -PARITY * line_sign
    } else {
        PARITY * sign
    };

    proximity + parity
}

/// Empty-cell count of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineOccupancy {
    pub line: Line,
    pub empty: usize,
}

/// Static analysis of a board, without searching
#[derive(Debug, Clone, Serialize)]
pub struct BoardAnalysis {
    pub size: usize,
    pub empty_cells: usize,
    pub terminal: bool,
    pub completed_line: Option<Line>,
    pub heuristic_max: i32,
    pub heuristic_min: i32,
    pub lines: Vec<LineOccupancy>,
}

impl BoardAnalysis {
    pub fn of(board: &Board) -> Self {
        let size = board.size();
        let lines = all_lines(size)
            .map(|line| LineOccupancy {
                line,
                empty: LineAnalyzer::empty_count(board.cells(), size, line),
            })
            .collect();

        Self {
            size,
            empty_cells: board.cell_count() - board.marked_count(),
            terminal: board.is_terminal(),
            completed_line: board.completed_line(),
            heuristic_max: evaluate_heuristic(board, Player::Max),
            heuristic_min: evaluate_heuristic(board, Player::Min),
            lines,
        }
    }
}
