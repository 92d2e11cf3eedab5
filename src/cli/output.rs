//! Output formatting for CLI

use clap::ValueEnum;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain board string
    #[default]
    Text,
    /// Single JSON object
    Json,
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board as an N-line grid
pub fn print_grid(board: &crate::game::Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}
