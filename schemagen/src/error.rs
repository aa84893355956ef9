//! Error types for the schema generation pipeline.
//!
//! Each stage has its own error type:
//!
//! - [`LoadError`] - reading and parsing the input CSV
//! - [`SchemaError`] - required header fields missing
//! - [`WriteError`] - rendering or writing the output YAML
//! - [`PipelineError`] - top-level orchestration, wraps the three above
//!
//! Conversion into [`PipelineError`] is automatic via `From`, so `?` works
//! across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::REQUIRED_FIELDS;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing, unreadable, or permission denied.
    #[error("Unable to read specified csv '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid UTF-8.
    #[error("Unable to decode '{}' as UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Malformed CSV content.
    #[error("Unable to parse csv '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header row.
    #[error("No header row found in '{}'", .path.display())]
    NoHeaders { path: PathBuf },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Encoding { path, .. }
            | LoadError::Csv { path, .. }
            | LoadError::NoHeaders { path } => path,
        }
    }
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors from the required-field check.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The CSV has a header but no data rows.
    #[error("The specified csv has no data rows; expected columns: {}", REQUIRED_FIELDS.join(", "))]
    NoRecords,

    /// One or more required fields are absent from the header.
    #[error(
        "The specified csv does not have the expected columns (missing: {}); expected columns: {}",
        .missing.join(", "),
        REQUIRED_FIELDS.join(", ")
    )]
    MissingFields { missing: Vec<String> },
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while rendering or writing the output document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Destination could not be created, written, or renamed into place.
    #[error("Unable to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be converted to YAML.
    #[error("Unable to render YAML: {0}")]
    Render(String),

    /// Indentation widths that cannot produce valid block YAML.
    #[error("Invalid indentation (mapping {mapping}, sequence {sequence}, offset {offset}): {reason}")]
    InvalidIndent {
        mapping: usize,
        sequence: usize,
        offset: usize,
        reason: &'static str,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::generate_schema`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl PipelineError {
    /// Process exit status for this failure.
    ///
    /// Clap already uses 2 for usage errors, so stage failures start at 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Load(_) => 3,
            PipelineError::Schema(_) => 4,
            PipelineError::Write(_) => 5,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
