//! schemagen CLI - Generate a dbt schema.yml from a CSV
//!
//! ```bash
//! schemagen --csv-loc models.csv                      # writes models_schema.yml
//! schemagen --csv-loc "path with space/models.csv"
//! schemagen --csv-loc models.csv --report-skipped     # list rows left out
//! ```
//!
//! Exit status: 0 on success, 3 unreadable input, 4 missing required
//! columns, 5 output not written.

use clap::Parser;
use schemagen::logs::log_error;
use schemagen::{generate_schema, GenerateOptions, PipelineError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(
    about = "YAML generator using a csv file as source with the following columns: \
             Target Table, Target Table Description, Target Column, Target Column Description, dbt test",
    long_about = None
)]
struct Cli {
    /// Location of the csv file to be processed. Wrap the path in quotes if it contains spaces
    #[arg(long, alias = "csv_loc", value_name = "PATH")]
    csv_loc: PathBuf,

    /// Report rows skipped because the table or column name is empty
    #[arg(long)]
    report_skipped: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = GenerateOptions {
        report_skipped: cli.report_skipped,
        ..GenerateOptions::default()
    };

    match generate_schema(&cli.csv_loc, options) {
        Ok(result) => {
            println!("The following file was created successfully:\n");
            println!("{}", result.output_path.display());
        }
        Err(e) => {
            report_failure(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn report_failure(err: &PipelineError) {
    log_error(failure_message(err));
}

/// Schema errors already carry the expected column list in their text.
fn failure_message(err: &PipelineError) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use schemagen::{SchemaError, REQUIRED_FIELDS};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_csv_loc_required() {
        assert!(Cli::try_parse_from(["schemagen"]).is_err());
    }

    #[test]
    fn test_underscore_alias_and_spaces() {
        let cli = Cli::try_parse_from(["schemagen", "--csv_loc", "my dir/models.csv"]).unwrap();
        assert_eq!(cli.csv_loc, PathBuf::from("my dir/models.csv"));
        assert!(!cli.report_skipped);

        let cli = Cli::try_parse_from(["schemagen", "--csv-loc", "m.csv", "--report-skipped"]).unwrap();
        assert!(cli.report_skipped);
    }

    #[test]
    fn test_schema_failure_lists_expected_columns_once() {
        let errors = [
            PipelineError::from(SchemaError::MissingFields {
                missing: vec!["dbt test".to_string()],
            }),
            PipelineError::from(SchemaError::NoRecords),
        ];

        for err in &errors {
            let message = failure_message(err);
            assert_eq!(message.matches("expected columns:").count(), 1, "{}", message);
            assert_eq!(message.matches("Target Column Description").count(), 1, "{}", message);
            for field in REQUIRED_FIELDS {
                assert!(message.contains(field), "{}", message);
            }
        }
    }
}
