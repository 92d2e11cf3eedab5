//! Common test utilities for the linemark test suite.
//!
//! Seeded board generation and an unpruned minimax reference used across
//! multiple tests.

#![allow(dead_code)]

use linemark::{
    game::{Board, Player},
    search::evaluate_terminal,
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Mark random cells of an empty board until at most `max_empty` remain.
///
/// Marks that would finish a line are skipped, so the result is never
/// terminal. It may keep more than `max_empty` empty cells when every
/// remaining mark would end the game.
pub fn random_open_board(rng: &mut StdRng, size: usize, max_empty: usize) -> Board {
    let mut board = Board::new(size).expect("size is positive");
    let mut order: Vec<usize> = (0..size * size).collect();
    order.shuffle(rng);

    for pos in order {
        if board.empty_positions().len() <= max_empty {
            break;
        }
        let next = board.with_mark(pos).expect("position taken from shuffled order");
        if !next.is_terminal() {
            board = next;
        }
    }
    board
}

/// Mark each cell independently with the given probability.
pub fn random_board(rng: &mut StdRng, size: usize, mark_probability: f64) -> Board {
    let mut board = Board::new(size).expect("size is positive");
    for pos in 0..size * size {
        if rng.random_bool(mark_probability) {
            board = board.with_mark(pos).expect("each position marked once");
        }
    }
    board
}

/// Plain minimax over the whole tree, without pruning or time limits.
pub fn minimax(board: &Board, player: Player, depth: usize) -> i32 {
    if board.is_terminal() {
        return evaluate_terminal(player, depth, board.size());
    }

    let scores = board.empty_positions().into_iter().map(|pos| {
        let child = board.with_mark(pos).expect("empty position");
        minimax(&child, player.opponent(), depth + 1)
    });

    let best = match player {
        Player::Max => scores.max(),
        Player::Min => scores.min(),
    };
    best.expect("non-terminal board has an empty cell")
}

/// Independent check of the game-over condition, walking rows, columns and
/// diagonals by coordinates.
pub fn has_full_line(board: &Board) -> bool {
    let n = board.size();
    let marked = |row: usize, col: usize| !board.is_empty(row * n + col);

    let full_row = (0..n).any(|row| (0..n).all(|col| marked(row, col)));
    let full_col = (0..n).any(|col| (0..n).all(|row| marked(row, col)));
    let full_main = (0..n).all(|i| marked(i, i));
    let full_anti = (0..n).all(|i| marked(i, n - 1 - i));

    full_row || full_col || full_main || full_anti
}
