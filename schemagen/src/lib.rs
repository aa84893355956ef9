//! # schemagen - dbt `schema.yml` from a CSV column catalogue
//!
//! Reads a CSV with one row per documented column and writes the matching
//! dbt properties file next to it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Parser    │────▶│  Aggregate  │────▶│ schema.yml  │
//! │  (UTF-8)    │     │ + validate  │     │ (tables)    │     │ (atomic)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schemagen::{generate_schema, GenerateOptions};
//!
//! let result = generate_schema("models.csv".as_ref(), GenerateOptions::default())?;
//! println!("Wrote {} tables to {}", result.table_count, result.output_path.display());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`models`] - Record, Document, Table, Column
//! - [`parser`] - CSV loading with delimiter detection
//! - [`validation`] - Required header fields
//! - [`transform`] - Rule extraction, aggregation, pipeline
//! - [`output`] - YAML rendering and atomic write
//! - [`logs`] - Progress output

pub mod error;
pub mod models;

pub mod parser;
pub mod validation;

pub mod transform;

pub mod output;

pub mod logs;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{LoadError, PipelineError, SchemaError, WriteError};

pub use models::{Column, Document, Record, Table, SCHEMA_VERSION};

pub use parser::{detect_delimiter, load_records, ParseResult};

pub use validation::{check_required_fields, missing_fields, REQUIRED_FIELDS};

pub use transform::{
    aggregate,
    aggregate_with_report,
    extract_rules,
    generate_schema,
    Aggregation,
    GenerateOptions,
    GenerateResult,
};

pub use output::{derive_output_path, render_document, write_document, IndentStyle};
