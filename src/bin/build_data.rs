//! Build Data - Regenerate site data from a UDisc scorecard export
//!
//! Reads the export CSV and writes `rounds.json`, `ladders.json`,
//! `handicaps.json` and `players.json` into the output directory.
//!
//! Usage: cargo run --bin build-data [-- --input <csv> --out-dir <dir>]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use udisc_ladder::pipeline::{build, BuildConfig};

#[derive(Parser)]
#[command(name = "build-data")]
#[command(about = "Derive rounds, season ladders, handicaps and player summaries from a UDisc export")]
struct Cli {
    /// UDisc scorecard export (CSV)
    #[arg(short, long, default_value = "data-source/UDisc Scorecards.csv")]
    input: PathBuf,

    /// Directory for the generated JSON documents
    #[arg(short, long, default_value = "_data")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = BuildConfig {
        input: cli.input,
        out_dir: cli.out_dir,
    };
    let written = build(&config)?;

    println!("Wrote:");
    for path in &written {
        println!(" - {}", path.display());
    }

    Ok(())
}
