//! Transformation module.
//!
//! - Rules: `dbt test` cell to rule names
//! - Aggregator: flat rows to the tables/columns tree
//! - Pipeline: load, validate, aggregate, write

pub mod aggregator;
pub mod pipeline;
pub mod rules;

pub use aggregator::{aggregate, aggregate_with_report, Aggregation};
pub use pipeline::{generate_schema, GenerateOptions, GenerateResult};
pub use rules::extract_rules;
