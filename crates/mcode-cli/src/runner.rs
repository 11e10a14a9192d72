//! # Validation Runner
//!
//! Orchestrates a single validation pass: resolve arguments, load the
//! schema, load the data document, validate, render the report.
//! Control flow is linear and synchronous; nothing persists after the
//! process exits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mcode_schema::{load_json, SchemaValidator, DEFAULT_SCHEMA_PATH};

use crate::report;

/// Exit code for structural input problems (unreadable or malformed
/// schema/data file), distinct from the missing-file code 1.
const EXIT_MALFORMED_INPUT: u8 = 2;

/// Validate a municipal code document against its JSON Schema.
///
/// Schema violations are reported as advisory warnings and never change
/// the exit status; only a missing or structurally broken input file is
/// fatal.
#[derive(Parser, Debug)]
#[command(name = "mcode", version, about)]
pub struct Cli {
    /// Path to the JSON document to validate.
    pub data_path: Option<PathBuf>,

    /// Schema to validate against.
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,
}

/// Run one validation pass and map the outcome to an exit code.
///
/// - no data path → usage line, exit 0 (informational, not a failure)
/// - data path missing on disk → `❌ File not found`, exit 1
/// - schema or data unreadable/malformed → `❌`-prefixed message, exit 2
/// - otherwise → `✅`/`⚠️` report, exit 0 regardless of warning count
pub fn run(cli: Cli) -> ExitCode {
    let Some(data_path) = cli.data_path else {
        println!("Usage: mcode <data.json>");
        return ExitCode::SUCCESS;
    };

    if !data_path.exists() {
        println!("❌ File not found: {}", data_path.display());
        return ExitCode::FAILURE;
    }

    let validator = match SchemaValidator::from_path(&cli.schema) {
        Ok(validator) => validator,
        Err(e) => {
            println!("❌ {e}");
            return ExitCode::from(EXIT_MALFORMED_INPUT);
        }
    };
    tracing::debug!(schema = %validator.schema_path().display(), "schema compiled");

    let data = match load_json(&data_path) {
        Ok(data) => data,
        Err(e) => {
            println!("❌ {e}");
            return ExitCode::from(EXIT_MALFORMED_INPUT);
        }
    };

    let violations = validator.validate(&data);
    tracing::debug!(count = violations.len(), "validation finished");

    print!("{}", report::render(&violations));
    ExitCode::SUCCESS
}
