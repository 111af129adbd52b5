//! ftloc CLI - command-line interface for the localization round trip

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "ftloc")]
#[command(about = "ftloc: localization round-trip tools for FTL game data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the ftloc CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
