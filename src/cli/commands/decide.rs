//! Decide command - choose the next move within a time budget

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    adapters::SystemClock,
    cli::output::OutputFormat,
    game::{Board, Player},
    ports::Clock,
    report::Decision,
    search::{DEFAULT_HARD_MARGIN_MS, DEFAULT_SOFT_FRACTION, SearchConfig, Searcher, TimeBudget},
};

#[derive(Parser, Debug)]
#[command(about = "Choose the next move within a time budget")]
pub struct DecideArgs {
    /// Number of rows (and columns) of the board
    pub size: usize,

    /// Current board in row-major order: '.' for empty, 'x' for marked
    pub config: String,

    /// Time allowed for the decision, in seconds
    pub seconds: f64,

    /// Player to move (`max` or `min`)
    #[arg(long, short = 'p', default_value = "max")]
    pub player: Player,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Share of the budget spent expanding the tree
    #[arg(long, default_value_t = DEFAULT_SOFT_FRACTION)]
    pub soft_fraction: f64,

    /// How long before the budget the answer must be ready, in milliseconds
    #[arg(long, default_value_t = DEFAULT_HARD_MARGIN_MS)]
    pub hard_margin_ms: f64,
}

/// Run a search and print the resulting board.
///
/// `clock` should be started when the process starts, so the hard deadline
/// covers everything the program does.
pub fn execute(args: DecideArgs, clock: SystemClock) -> Result<()> {
    let board = Board::from_config(args.size, &args.config)
        .with_context(|| format!("cannot read a {0}x{0} board", args.size))?;
    let budget = TimeBudget::from_secs(args.seconds)?;
    let config = SearchConfig::new()
        .with_soft_fraction(args.soft_fraction)
        .with_hard_margin_ms(args.hard_margin_ms)
        .with_first_player(args.player);

    let mut searcher = Searcher::new(clock, budget, config);
    let outcome = searcher.search(&board)?;

    let decision = Decision::from_outcome(&args.config, args.size, &outcome, clock.elapsed())?;
    info!("{}", decision.summary());

    match args.format {
        OutputFormat::Text => println!("{decision}"),
        OutputFormat::Json => println!("{}", decision.to_json()?),
    }

    Ok(())
}
