//! Domain models for the schema generation pipeline.
//!
//! - [`Record`] - one CSV row, field name to value
//! - [`Document`] - root of a dbt `schema.yml` (`version` + `models`)
//! - [`Table`] - one dbt model with its description and columns
//! - [`Column`] - one documented column with optional description and tests

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `version:` marker dbt expects at the top of every properties file.
pub const SCHEMA_VERSION: u32 = 2;

// =============================================================================
// Record
// =============================================================================

/// One input row.
///
/// Holds a value for every header column. Empty values mean "absent"; a
/// field the header does not have reads as the empty string too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `field`, or `""` when the field is empty or not in the header.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Value of `field` when present and non-empty.
    pub fn non_empty(&self, field: &str) -> Option<&str> {
        Some(self.get(field)).filter(|v| !v.is_empty())
    }

    /// Whether the header this record was read with has `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

// =============================================================================
// Document tree
// =============================================================================

/// Root of the generated properties file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: u32,
    pub models: Vec<Table>,
}

impl Document {
    pub fn new(models: Vec<Table>) -> Self {
        Self { version: SCHEMA_VERSION, models }
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.models.iter().map(|t| t.columns.len()).sum()
    }
}

/// A dbt model (database table).
///
/// `description` is always emitted, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub description: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            columns: Vec::new(),
        }
    }
}

/// A documented column.
///
/// Optional fields are OMITTED from the output when absent, never written
/// as empty strings or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tests: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tests(mut self, tests: Vec<String>) -> Self {
        self.tests = Some(tests);
        self
    }
}
