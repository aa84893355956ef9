//! High-level pipeline API for CSV to `schema.yml` generation.
//!
//! Runs the four stages strictly in order, stopping at the first failure:
//!
//! 1. Load the CSV
//! 2. Check the required header fields
//! 3. Aggregate rows into tables and columns
//! 4. Write the YAML beside the input
//!
//! # Example
//!
//! ```rust,ignore
//! use schemagen::{generate_schema, GenerateOptions};
//! use std::path::Path;
//!
//! let result = generate_schema(Path::new("models.csv"), GenerateOptions::default())?;
//! println!("Wrote {}", result.output_path.display());
//! ```

use std::path::{Path, PathBuf};

use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::output::{write_document, IndentStyle};
use crate::parser::load_records;
use crate::validation::{check_required_fields, has_target_column, TARGET_COLUMN};

use super::aggregator::aggregate_with_report;

/// Options for the generation pipeline
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Indentation of the emitted YAML
    pub indent: IndentStyle,

    /// Log the rows dropped for an empty table or column name
    pub report_skipped: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// Where the YAML was written
    pub output_path: PathBuf,

    /// Data rows read from the CSV
    pub row_count: usize,

    /// Tables (dbt models) emitted
    pub table_count: usize,

    /// Columns emitted across all tables
    pub column_count: usize,

    /// 1-based data row numbers skipped for an empty table or column name
    pub skipped_rows: Vec<usize>,
}

/// Generate `<stem>_schema.yml` from the CSV at `path`.
///
/// Load and validation failures return before anything is written.
pub fn generate_schema(path: &Path, options: GenerateOptions) -> PipelineResult<GenerateResult> {
    log_info(format!("📖 Reading {}", path.display()));
    let parsed = load_records(path)?;
    log_success(format!("Detected separator: '{}'", format_delimiter(parsed.delimiter)));
    log_success(format!("Read {} rows", parsed.records.len()));

    check_required_fields(&parsed.records)?;
    if !has_target_column(&parsed.records) {
        log_warning(format!("No '{}' column found; every row will be skipped", TARGET_COLUMN));
    }

    let aggregation = aggregate_with_report(&parsed.records);
    let document = aggregation.document;
    log_success(format!(
        "Built {} tables with {} columns",
        document.models.len(),
        document.column_count()
    ));

    if options.report_skipped {
        report_skipped(&aggregation.skipped_rows);
    }

    let output_path = write_document(&document, path, &options.indent)?;
    log_success(format!("Wrote {}", output_path.display()));

    Ok(GenerateResult {
        output_path,
        row_count: parsed.records.len(),
        table_count: document.models.len(),
        column_count: document.column_count(),
        skipped_rows: aggregation.skipped_rows,
    })
}

fn report_skipped(rows: &[usize]) {
    if rows.is_empty() {
        log_info("No rows skipped");
        return;
    }

    log_warning(format!("Skipped {} rows with an empty table or column name:", rows.len()));
    for row in rows {
        log_info_indent(format!("row {}", row), 1);
    }
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
