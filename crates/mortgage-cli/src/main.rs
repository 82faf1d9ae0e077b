mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::normalize::NormalizeArgs;
use commands::quote::QuoteArgs;

/// Mortgage repayment calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "mrc",
    version,
    about = "Mortgage repayment calculations with decimal precision",
    long_about = "A CLI for quoting mortgage repayments with decimal precision. \
                  Quotes amortizing and interest-only loans, accepts amounts as \
                  free text (separators and whitespace included), and prints \
                  JSON, table, CSV or minimal output."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the monthly payment and lifetime cost of a mortgage
    Quote(QuoteArgs),
    /// Normalize a free-text amount into a principal
    Normalize(NormalizeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Normalize(args) => commands::normalize::run_normalize(args),
        Commands::Version => {
            println!("mrc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
