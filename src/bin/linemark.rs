//! linemark CLI - pick the next move on an N×N line-marking board
//!
//! ```text
//! linemark decide 3 ......xx. 2
//! linemark inspect 4 x..x..x.x....x..
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use linemark::adapters::SystemClock;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linemark")]
#[command(version, about = "Time-bounded move search for the N×N line-marking game", long_about = None)]
struct Cli {
    /// Log search details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the next move within a time budget
    Decide(linemark::cli::commands::decide::DecideArgs),

    /// Analyze a board without searching
    Inspect(linemark::cli::commands::inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout only carries the answer
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let clock = SystemClock::start();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decide(args) => linemark::cli::commands::decide::execute(args, clock),
        Commands::Inspect(args) => linemark::cli::commands::inspect::execute(args),
    }
}
