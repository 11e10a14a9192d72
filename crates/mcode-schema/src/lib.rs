//! # mcode-schema — Schema Validation for Municipal Code Documents
//!
//! Provides runtime JSON Schema (Draft 2020-12) validation for municipal
//! code documents, with a deterministic ordering over reported violations.
//!
//! ## Validation (`validate`)
//!
//! The [`validate`] module compiles a schema file into a reusable
//! [`SchemaValidator`] and collects every violation the engine reports
//! for a document. Violations are advisory: they carry a location and a
//! message, and it is the caller's decision what to do with them.
//!
//! ## Instance Paths (`path`)
//!
//! The [`path`] module defines [`InstancePath`], the location of a
//! violation inside the validated document, together with the total order
//! that makes violation reports reproducible across runs: paths compare
//! segment-by-segment, and a shorter prefix sorts before any path that
//! extends it.
//!
//! ## Crate Policy
//!
//! - The set of violations reported for a (schema, document) pair is
//!   exactly the set the engine reports — nothing added, nothing dropped,
//!   only ordered.
//! - Structural file problems (unreadable file, malformed JSON) are
//!   errors; schema violations are not.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod path;
pub mod validate;

pub use path::{InstancePath, PathSegment};
pub use validate::{load_json, SchemaError, SchemaValidator, Violation, DEFAULT_SCHEMA_PATH};
