// 📂 CSV Reader - BOM-safe, delimiter-sniffing ingestion
// French exports come with a UTF-8 BOM and either `;` or `,`; both are
// handled here so the rest of the crate only ever sees clean records.

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// A parsed CSV: header row plus data records.
#[derive(Debug)]
pub struct Table {
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
}

/// Pick the delimiter by counting candidates in a header sample.
/// `;` wins ties (the common case for FR spreadsheets).
pub fn detect_delimiter(sample: &str) -> u8 {
    let semi = sample.matches(';').count();
    let comma = sample.matches(',').count();
    if semi >= comma {
        b';'
    } else {
        b','
    }
}

/// Read a roster CSV with headers. Fatal on a missing file or an empty
/// header row; nothing is written downstream on failure.
pub fn read_table(path: &Path) -> Result<Table> {
    let text = read_text(path)?;
    let delimiter = detect_delimiter(&sample(&text));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV headers: {}", path.display()))?
        .clone();

    if headers.iter().all(|h| h.trim().is_empty()) {
        bail!("CSV has no headers: {}", path.display());
    }

    let mut records = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse CSV row: {}", path.display()))?;
        records.push(record);
    }

    Ok(Table { headers, records })
}

/// Read a CSV as raw rows, no header interpretation. Used by the jersey
/// transform, which does its own header detection with positional fallback.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = read_text(path)?;
    let delimiter = detect_delimiter(&sample(&text));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to parse CSV row: {}", path.display()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(rows)
}

fn read_text(path: &Path) -> Result<String> {
    let raw = fs::read(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    let text = String::from_utf8_lossy(&raw);
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

/// First few lines, enough for delimiter detection.
fn sample(text: &str) -> String {
    text.lines().take(5).collect::<Vec<_>>().join("\n")
}

// ============================================================================
// TESTS
// ============================================================================
