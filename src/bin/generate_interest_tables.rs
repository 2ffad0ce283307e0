//! Print DAY_INTEREST, MONTH_INTEREST and YEAR_INTEREST to stdout
//!
//! The annual factor is the compiled-in default; change
//! `DEFAULT_ANNUAL_FACTOR` and regenerate to use another rate.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use interest_tables::tables::render::{write_json, write_rust};
use interest_tables::{GeneratorParams, InterestTables};
use std::io;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Rust constant declarations
    Rust,
    /// Factors and tables as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "generate_interest_tables")]
#[command(about = "Emit precomputed compound-interest ratio tables")]
struct Args {
    #[arg(long, value_enum, default_value = "rust")]
    format: OutputFormat,

    #[arg(long, help = "Log derivation details to stderr")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let params = GeneratorParams::default();
    let factors = params.validate().context("Invalid annual growth factor")?;
    log::info!(
        "Generating tables for annual factor {} (daily {}, monthly {})",
        factors.annual,
        factors.daily,
        factors.monthly
    );

    // All tables are built before anything reaches stdout
    let tables = InterestTables::generate(&factors).context("Failed to generate interest tables")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match args.format {
        OutputFormat::Rust => write_rust(&mut out, &tables, &params),
        OutputFormat::Json => write_json(&mut out, &tables),
    };
    written.context("Failed to write tables")?;

    log::info!(
        "Wrote {} entries",
        tables.iter().map(|t| t.len()).sum::<usize>()
    );
    Ok(())
}
