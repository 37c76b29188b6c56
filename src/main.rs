//! Mazer CLI - mead ingredient calculator
//!
//! Usage: mazer [COMMAND]
//!
//! Commands:
//!   calc         One-shot calculation from flags
//!   assumptions  Show the model assumptions
//!
//! Run `mazer` with no arguments on a terminal for the interactive wizard.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use is_terminal::IsTerminal;

use commands::calc::CalcOptions;

/// Mazer - mead ingredient calculator
#[derive(Parser, Debug)]
#[command(name = "mazer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'mazer' without arguments for the interactive wizard.")]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v shows the calculation breakdown)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate honey and top-off water for a batch
    Calc {
        /// Batch volume, in gallons (US) or liters (metric)
        #[arg(long)]
        volume: f64,

        /// Unit system: us or metric (defaults from config)
        #[arg(short, long)]
        units: Option<String>,

        /// Target ABV percent (5-25)
        #[arg(short, long)]
        abv: u8,

        /// Sweetness level: dry, semi-sweet, sweet, dessert
        #[arg(short, long)]
        sweetness: String,

        /// Turbo yeast method - forces final gravity to 1.000
        #[arg(long)]
        turbo: bool,
    },

    /// Show the assumptions behind the calculation
    Assumptions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calc {
            volume,
            units,
            abv,
            sweetness,
            turbo,
        }) => commands::calc::run(CalcOptions {
            volume,
            units: units.as_deref(),
            abv,
            sweetness: &sweetness,
            turbo,
            json: cli.json,
            verbose: cli.verbose,
        }),
        Some(Commands::Assumptions) => {
            print!("{}", mazer::report::render_banner());
            Ok(())
        }
        None => {
            // Wizard only makes sense on a terminal; piped invocations get
            // the usage text instead.
            if std::io::stdin().is_terminal() && !cli.json {
                commands::interactive::run(cli.verbose)
            } else {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}
