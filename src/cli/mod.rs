//! Command-line interface for the linemark engine
//!
//! `decide` runs a timed search and prints the new board; `inspect` shows the
//! static analysis of a board without searching.

pub mod commands;
pub mod output;
