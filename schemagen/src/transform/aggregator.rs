//! Fold flat CSV records into the `models` tree.
//!
//! ```text
//! CSV rows (one per column)              →  Document
//! ┌──────────────────────────────────┐      ┌──────────────────────────┐
//! │ orders,    Orders table, id      │      │ orders   [id, amount]    │
//! │ orders,    Orders table, amount  │  →   ├──────────────────────────┤
//! │ customers, Customers,    id      │      │ customers [id]           │
//! └──────────────────────────────────┘      └──────────────────────────┘
//! ```
//!
//! Tables are keyed by name and keep first-occurrence order; the first row
//! for a table decides its description. Columns are NOT de-duplicated: a
//! repeated (table, column) pair yields a repeated column entry.

use crate::models::{Column, Document, Record, Table};
use crate::validation::{DBT_TEST, TARGET_COLUMN, TARGET_COLUMN_DESCRIPTION, TARGET_TABLE, TARGET_TABLE_DESCRIPTION};

use super::rules::extract_rules;

/// Aggregated document plus the rows that were left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub document: Document,
    /// 1-based data row numbers (header excluded) with an empty table or
    /// column name.
    pub skipped_rows: Vec<usize>,
}

/// Build the document from `records`.
pub fn aggregate(records: &[Record]) -> Document {
    aggregate_with_report(records).document
}

/// Same as [`aggregate`], also reporting which rows were skipped.
pub fn aggregate_with_report(records: &[Record]) -> Aggregation {
    let mut skipped_rows = Vec::new();
    let mut qualifying = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        match (record.non_empty(TARGET_TABLE), record.non_empty(TARGET_COLUMN)) {
            (Some(table), Some(column)) => qualifying.push((table, column, record)),
            _ => skipped_rows.push(idx + 1),
        }
    }

    // Every table must exist before any column is attached.
    let mut models: Vec<Table> = Vec::new();
    for &(table, _, record) in &qualifying {
        if !models.iter().any(|t| t.name == table) {
            models.push(Table::new(table, record.get(TARGET_TABLE_DESCRIPTION)));
        }
    }

    for &(table, column, record) in &qualifying {
        let column = build_column(column, record);
        if let Some(target) = models.iter_mut().find(|t| t.name == table) {
            target.columns.push(column);
        }
    }

    Aggregation {
        document: Document::new(models),
        skipped_rows,
    }
}

fn build_column(name: &str, record: &Record) -> Column {
    let mut column = Column::new(name);

    if let Some(description) = record.non_empty(TARGET_COLUMN_DESCRIPTION) {
        column = column.with_description(description);
    }
    if let Some(tests) = record.non_empty(DBT_TEST) {
        column = column.with_tests(extract_rules(tests));
    }

    column
}
