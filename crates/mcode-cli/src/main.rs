//! # mcode CLI Entry Point
//!
//! Parses arguments and dispatches to the validation runner.

use std::process::ExitCode;

use clap::Parser;

use mcode_cli::Cli;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    mcode_cli::run(Cli::parse())
}
