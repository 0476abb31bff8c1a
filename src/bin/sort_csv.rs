//! sort_csv.rs
//!
//! Sorts the job-postings CSV by submission timestamp, newest first,
//! keeping the free-text preamble above the column header intact.

use anyhow::{Context, Result};
use clap::Parser;
use jobscrub::sort;
use jobscrub::table::Table;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Sort the job postings CSV by timestamp, most recent first")]
struct Args {
    /// Input CSV file path
    input: PathBuf,

    /// Output CSV file path (default: input path with a _sorted suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// `jobs.csv` → `jobs_sorted.csv`, next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let mut name = format!("{stem}_sorted");
    if let Some(ext) = input.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    input.with_file_name(name)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let output = args.output.clone().unwrap_or_else(|| default_output(&args.input));

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input file {}", args.input.display()))?;
    let table = Table::parse(&text)?;

    let rows = sort::sorted_rows(&table);
    let rendered = table.render_csv(rows.iter().copied())?;
    fs::write(&output, rendered)
        .with_context(|| format!("writing output file {}", output.display()))?;

    println!("Sorted {} job entries by timestamp (most recent first)", rows.len());
    println!("Output written to: {}", output.display());

    Ok(())
}
