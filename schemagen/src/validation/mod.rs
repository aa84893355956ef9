//! Required-field gate for the input CSV.
//!
//! The first record stands in for the whole file: its field names are the
//! header row. `Target Column` is read by the aggregator but is not part of
//! [`REQUIRED_FIELDS`]; existing inputs depend on that, so a missing
//! `Target Column` is reported through [`has_target_column`] instead of
//! failing the run.

use crate::error::SchemaError;
use crate::models::Record;

pub const TARGET_TABLE: &str = "Target Table";
pub const TARGET_TABLE_DESCRIPTION: &str = "Target Table Description";
pub const TARGET_COLUMN: &str = "Target Column";
pub const TARGET_COLUMN_DESCRIPTION: &str = "Target Column Description";
pub const DBT_TEST: &str = "dbt test";

/// Fields that must appear in the header for the run to proceed.
pub const REQUIRED_FIELDS: [&str; 4] = [
    TARGET_TABLE,
    TARGET_TABLE_DESCRIPTION,
    TARGET_COLUMN_DESCRIPTION,
    DBT_TEST,
];

/// Required fields absent from `record`, in [`REQUIRED_FIELDS`] order.
pub fn missing_fields(record: &Record) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !record.has_field(field))
        .collect()
}

/// Check the first record carries every required field.
///
/// # Returns
/// * `Ok(())` if all required fields are present
/// * `Err(SchemaError::NoRecords)` if there is no first record
/// * `Err(SchemaError::MissingFields)` otherwise
pub fn check_required_fields(records: &[Record]) -> Result<(), SchemaError> {
    let first = records.first().ok_or(SchemaError::NoRecords)?;

    let missing = missing_fields(first);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingFields {
            missing: missing.into_iter().map(String::from).collect(),
        })
    }
}

/// Whether the header has `Target Column`. Without it every row is skipped.
pub fn has_target_column(records: &[Record]) -> bool {
    records.first().is_some_and(|r| r.has_field(TARGET_COLUMN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> Record {
        fields.iter().map(|f| (*f, "x")).collect()
    }

    #[test]
    fn test_all_fields_present() {
        let records = vec![record(&[
            TARGET_TABLE,
            TARGET_TABLE_DESCRIPTION,
            TARGET_COLUMN,
            TARGET_COLUMN_DESCRIPTION,
            DBT_TEST,
            "Owner",
        ])];
        assert!(check_required_fields(&records).is_ok());
        assert!(has_target_column(&records));
    }

    #[test]
    fn test_missing_dbt_test() {
        let records = vec![record(&[
            TARGET_TABLE,
            TARGET_TABLE_DESCRIPTION,
            TARGET_COLUMN,
            TARGET_COLUMN_DESCRIPTION,
        ])];
        match check_required_fields(&records) {
            Err(SchemaError::MissingFields { missing }) => assert_eq!(missing, vec!["dbt test"]),
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_target_column_not_required() {
        let records = vec![record(&REQUIRED_FIELDS)];
        assert!(check_required_fields(&records).is_ok());
        assert!(!has_target_column(&records));
    }

    #[test]
    fn test_only_first_record_checked() {
        let records = vec![record(&REQUIRED_FIELDS), record(&["something else"])];
        assert!(check_required_fields(&records).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(check_required_fields(&[]), Err(SchemaError::NoRecords)));
        assert!(!has_target_column(&[]));
    }

    #[test]
    fn test_missing_fields_order() {
        let missing = missing_fields(&record(&[TARGET_TABLE_DESCRIPTION]));
        assert_eq!(missing, vec![TARGET_TABLE, TARGET_COLUMN_DESCRIPTION, DBT_TEST]);
    }
}
