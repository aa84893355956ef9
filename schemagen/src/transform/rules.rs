//! Rule-name extraction from the `dbt test` field.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Conjunction people write between rule names ("not_null and unique").
const CONJUNCTION: &str = "and";

/// Split a `dbt test` cell into rule names.
///
/// Every maximal run of word characters is a rule name, left to right.
/// Separators are dropped: punctuation, whitespace and a bare `and`.
/// Nothing is validated.
///
/// # Example
/// ```
/// use schemagen::transform::extract_rules;
///
/// assert_eq!(
///     extract_rules("not_null, unique and accepted_values"),
///     vec!["not_null", "unique", "accepted_values"],
/// );
/// ```
pub fn extract_rules(field: &str) -> Vec<String> {
    WORD.find_iter(field)
        .map(|m| m.as_str())
        .filter(|token| !token.eq_ignore_ascii_case(CONJUNCTION))
        .map(String::from)
        .collect()
}
