//! # mcode-cli — Municipal Code Validation CLI
//!
//! Command-line front end for `mcode-schema`: validates municipal code
//! documents against the shipped schema and reports violations as
//! ordered, advisory warnings.
//!
//! ## Behavior
//!
//! - `mcode <data.json>` — validate a document against the municipal
//!   code schema and print a `✅`/`⚠️` report. Schema violations are
//!   advisory: the process exits 0 even when warnings are printed.
//! - `mcode` with no arguments prints a usage line and exits 0.
//! - A missing data file exits 1; an unreadable or malformed schema or
//!   data file exits 2.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business
//!   logic. The runner delegates validation to `mcode-schema` — no
//!   schema semantics live here.
//! - Report lines go to stdout and must stay byte-stable: downstream
//!   CI greps for the `✅`/`⚠️`/`❌` markers.

pub mod report;
pub mod runner;

pub use runner::{run, Cli};
