//! csv_to_json.rs
//!
//! Converts the job-postings CSV into the JSON feed served to the site:
//! an array of camelCase objects with Unix timestamps, newest first.

use anyhow::{Context, Result};
use clap::Parser;
use jobscrub::convert;
use jobscrub::table::Table;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Convert the job postings CSV to JSON with Unix timestamps")]
struct Args {
    /// Input CSV file path
    input: PathBuf,

    /// Output JSON file path (default: input path with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("json"));

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input file {}", args.input.display()))?;
    let table = Table::parse(&text)?;
    let jobs = convert::convert_rows(&table);

    let file = File::create(&output)
        .with_context(|| format!("creating output file {}", output.display()))?;
    serde_json::to_writer_pretty(file, &jobs)
        .with_context(|| format!("writing output file {}", output.display()))?;

    println!("Converted {} job entries to JSON format", jobs.len());
    println!("Output written to: {}", output.display());

    Ok(())
}
