//! CSV loader with delimiter auto-detection.
//!
//! Turns the input file into an ordered list of [`Record`]s keyed by the
//! header row. The delimiter is the one under which the header carries the
//! required catalogue fields.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::Record;
use crate::validation::REQUIRED_FIELDS;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// One record per data row, in file order
    pub records: Vec<Record>,
    /// Column headers, in file order
    pub headers: Vec<String>,
    /// Detected delimiter
    pub delimiter: char,
}

/// Candidate separators, in order of preference.
const SEPARATORS: [char; 4] = [',', ';', '\t', '|'];

/// Pick the separator whose header row holds every `required` field name.
///
/// The header is split the way the CSV reader splits it, so quoted names
/// and separator characters inside extra column names do not count. Falls
/// back to `,` when no candidate yields all of `required`.
pub fn detect_delimiter(content: &str, required: &[&str]) -> char {
    SEPARATORS
        .into_iter()
        .find(|&sep| {
            let headers = header_fields(content, sep);
            required.iter().all(|field| headers.iter().any(|h| h == field))
        })
        .unwrap_or(',')
}

fn header_fields(content: &str, delimiter: char) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    match reader.headers() {
        Ok(headers) => headers.iter().map(String::from).collect(),
        Err(_) => Vec::new(),
    }
}

/// Read and parse a CSV file.
///
/// # Example
/// ```ignore
/// let result = load_records("tables.csv")?;
/// println!("Delimiter: '{}', records: {}", result.delimiter, result.records.len());
/// ```
pub fn load_records<P: AsRef<Path>>(path: P) -> LoadResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&bytes, path)
}

/// Parse CSV bytes. `path` is only used for error context.
pub fn parse_bytes(bytes: &[u8], path: &Path) -> LoadResult<ParseResult> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let content = std::str::from_utf8(bytes).map_err(|source| LoadError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let delimiter = detect_delimiter(content, &REQUIRED_FIELDS);
    parse_str(content, delimiter, path)
}

/// Parse CSV text with an explicit delimiter.
///
/// Short rows leave the missing fields empty; values past the last header
/// are dropped.
pub fn parse_str(content: &str, delimiter: char, path: &Path) -> LoadResult<ParseResult> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoHeaders { path: path.to_path_buf() });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.as_str(), row.get(i).unwrap_or("")))
            .collect();
        records.push(record);
    }

    Ok(ParseResult {
        records,
        headers,
        delimiter,
    })
}
