pub mod header;
pub mod row;

pub use header::locate_header;
pub use row::Row;

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use tracing::debug;

/// A parsed job-postings table: the free-text preamble found above the real
/// column header, the header itself, and every row below it. Columns are
/// addressed positionally or by name; the name→index map is built once from
/// the header record so both access styles share a single parse.
#[derive(Debug, Clone)]
pub struct Table {
    preamble: Vec<String>,
    headers: Vec<String>,
    columns: HashMap<String, usize>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Parse the full text of a source file. The header is located first
    /// (`locate_header`); everything above it is kept verbatim as preamble,
    /// everything from it on is read as quoted CSV. Ragged rows are
    /// accepted as-is.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let offset = locate_header(&lines);
        debug!(offset, "located column header");

        let preamble: Vec<String> = lines[..offset].iter().map(|l| l.to_string()).collect();
        // Rejoin so quoted fields spanning lines survive the header scan.
        let body = lines[offset..].join("\n");

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .context("reading column header record")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut columns = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            columns.entry(name.clone()).or_insert(idx);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("reading data row")?;
            rows.push(Row::new(record.iter().map(str::to_string).collect()));
        }

        Ok(Self {
            preamble,
            headers,
            columns,
            rows,
        })
    }

    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of a column by its header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Render preamble, header and the given rows back to CSV text.
    pub fn render_csv<'a, I>(&self, rows: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .context("writing column header")?;
        for row in rows {
            writer
                .write_record(row.fields())
                .context("writing data row")?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow!("flushing csv writer: {e}"))?;
        out.push_str(&String::from_utf8(bytes).context("csv output was not UTF-8")?);
        Ok(out)
    }
}
