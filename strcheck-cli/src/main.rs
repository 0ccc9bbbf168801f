//! strcheck command-line entry point

use anyhow::Result;
use clap::Parser;
use strcheck_cli::commands::Commands;
use strcheck_cli::logging;
use strcheck_cli::output::{self, OutputFormat};

/// Check strings against character sets, intervals and dictionaries
#[derive(Debug, Parser)]
#[command(name = "strcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    log::debug!("Arguments: {:?}", cli);

    let report = cli.command.execute()?;
    let mut formatter = output::formatter(cli.format, std::io::stdout());
    formatter.write_report(&report)?;
    formatter.finish()
}
