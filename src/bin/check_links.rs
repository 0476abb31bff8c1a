//! check_links.rs
//!
//! Walks every job posting in the CSV, HEAD-requests its link, rewrites
//! links that now redirect elsewhere, and drops rows whose links are dead.

use anyhow::{Context, Result};
use clap::Parser;
use jobscrub::links::{self, LinkChecker};
use jobscrub::table::Table;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Check and clean job posting URLs")]
struct Args {
    /// Input CSV file path
    input: PathBuf,

    /// Output CSV file path (default: overwrites input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show what would be removed without making changes
    #[arg(long)]
    dry_run: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let output = args.output.clone().unwrap_or_else(|| args.input.clone());

    println!("Checking job posting URLs in: {}", args.input.display());
    if args.dry_run {
        println!("DRY RUN MODE - No changes will be made");
    } else {
        println!("Output will be written to: {}", output.display());
    }
    println!("{}", "-".repeat(50));

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input file {}", args.input.display()))?;
    let table = Table::parse(&text)?;

    let checker = LinkChecker::new(Duration::from_secs(args.timeout))?;
    let (kept, stats) = links::clean_rows(&table, &checker, args.dry_run)?;

    if !args.dry_run && !kept.is_empty() {
        let rendered = table.render_csv(&kept)?;
        fs::write(&output, rendered)
            .with_context(|| format!("writing output file {}", output.display()))?;
        println!("\nCleaned data written to: {}", output.display());
    }

    println!("{}", "-".repeat(50));
    println!("SUMMARY:");
    println!("Total rows processed: {}", stats.total_rows);
    println!("Active URLs: {}", stats.active_urls);
    println!("Inactive URLs: {}", stats.inactive_urls);
    println!("Empty URLs: {}", stats.empty_urls);
    println!("URLs updated due to redirects: {}", stats.redirects_updated);

    if args.dry_run {
        println!("\nWould remove {} rows with inactive URLs", stats.inactive_urls);
        println!("Would update {} URLs due to redirects", stats.redirects_updated);
    } else {
        println!("\nRemoved {} rows with inactive URLs", stats.inactive_urls);
        println!("Updated {} URLs due to redirects", stats.redirects_updated);
    }

    Ok(())
}
