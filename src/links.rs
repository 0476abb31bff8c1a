use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::table::{Row, Table};

/// Header name of the submitted-link column.
pub const LINK_COLUMN: &str = "What's the link to the job posting?";

/// Pause after every outbound request so we stay polite to job boards.
const THROTTLE: Duration = Duration::from_millis(500);

/// Anything longer than this is spreadsheet debris, not a URL.
const MAX_URL_LEN: usize = 500;

/// Counters accumulated over one cleaning run. Threaded through the row
/// loop and returned to the caller; nothing global.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckStats {
    pub total_rows: u64,
    pub active_urls: u64,
    pub inactive_urls: u64,
    pub empty_urls: u64,
    pub redirects_updated: u64,
}

/// Prefix bare host/path submissions with https://.
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Reject obviously broken submissions before spending a network call:
/// overlong strings and things with whitespace where a scheme or host
/// should be.
pub fn looks_malformed(url: &str) -> bool {
    url.len() > MAX_URL_LEN || url.chars().take(10).any(|c| c == ' ')
}

/// HEAD-probes submitted links, following redirects.
pub struct LinkChecker {
    client: Client,
}

impl LinkChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }

    /// Probe one URL. Returns whether the link is active (final status
    /// below 400) and the final URL after redirects. Transport failures of
    /// any kind classify as inactive; there is no retry.
    pub fn probe(&self, url: &str) -> (bool, String) {
        let url = ensure_scheme(url);
        match self.client.head(&url).send() {
            Ok(resp) => (resp.status().as_u16() < 400, resp.url().to_string()),
            Err(_) => (false, url),
        }
    }
}

/// Walk every row of the table, probing each submitted link.
///
/// Rows with blank links pass through untouched. Rows whose link is dead or
/// malformed are dropped. Active rows whose final URL differs from the
/// submission are rewritten in place. In dry-run mode rows are classified
/// and counted but none are collected for writing.
pub fn clean_rows(
    table: &Table,
    checker: &LinkChecker,
    dry_run: bool,
) -> Result<(Vec<Row>, CheckStats)> {
    let link_col = table
        .column(LINK_COLUMN)
        .with_context(|| format!("input has no {LINK_COLUMN:?} column"))?;

    let mut stats = CheckStats::default();
    let mut kept: Vec<Row> = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        // The column header is row 1 in the source file.
        let row_num = idx + 2;
        stats.total_rows += 1;

        let url = row.get(link_col).trim().to_string();
        if url.is_empty() {
            stats.empty_urls += 1;
            if !dry_run {
                kept.push(row.clone());
            }
            continue;
        }

        if looks_malformed(&url) {
            warn!(row = row_num, "skipping malformed URL: {:.100}", url);
            stats.inactive_urls += 1;
            continue;
        }

        info!("checking {url}");
        let (active, final_url) = checker.probe(&url);

        if active {
            stats.active_urls += 1;
            let mut row = row.clone();
            if final_url != url {
                stats.redirects_updated += 1;
                info!("  active (redirected to {final_url})");
                row.set(link_col, final_url);
            } else {
                info!("  active");
            }
            if !dry_run {
                kept.push(row);
            }
        } else {
            stats.inactive_urls += 1;
            info!("  inactive, dropping row");
        }

        thread::sleep(THROTTLE);
    }

    Ok((kept, stats))
}
