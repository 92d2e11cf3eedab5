//! Inspect command - static analysis of a board

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{OutputFormat, print_grid, print_kv, print_section},
    game::{Board, LineKind},
    search::BoardAnalysis,
};

#[derive(Parser, Debug)]
#[command(about = "Show terminal status, heuristic scores and line occupancy")]
pub struct InspectArgs {
    /// Number of rows (and columns) of the board
    pub size: usize,

    /// Board in row-major order: '.' for empty, 'x' for marked
    pub config: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let board = Board::from_config(args.size, &args.config)?;
    let analysis = BoardAnalysis::of(&board);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print_analysis(&board, &analysis),
    }

    Ok(())
}

fn line_label(kind: LineKind, index: usize) -> String {
    match kind {
        LineKind::Row => format!("row {}", index + 1),
        LineKind::Column => format!("column {}", index + 1),
        LineKind::MainDiagonal => "main diagonal".to_string(),
        LineKind::AntiDiagonal => "anti-diagonal".to_string(),
    }
}

fn print_analysis(board: &Board, analysis: &BoardAnalysis) {
    print_section(&format!("{0}x{0} board", analysis.size));
    print_grid(board);

    println!();
    print_kv("Empty cells", &analysis.empty_cells.to_string());
    print_kv(
        "Game over",
        &match analysis.completed_line {
            Some(line) => format!("yes ({} complete)", line_label(line.kind, line.index)),
            None => "no".to_string(),
        },
    );
    print_kv("Heuristic (max)", &analysis.heuristic_max.to_string());
    print_kv("Heuristic (min)", &analysis.heuristic_min.to_string());

    print_section("Empty cells per line");
    for occupancy in &analysis.lines {
        print_kv(
            &line_label(occupancy.line.kind, occupancy.line.index),
            &occupancy.empty.to_string(),
        );
    }
}
