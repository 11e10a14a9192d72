//! # Schema Validation
//!
//! Runtime validation of JSON documents against a JSON Schema
//! (Draft 2020-12) definition.
//!
//! ## Reporting Invariant
//!
//! The violations returned for a (schema, document) pair are exactly the
//! violations the `jsonschema` engine reports — none added, none
//! suppressed — ordered deterministically by instance path (message as
//! tie-break for co-located violations). The engine's own iteration
//! order is never relied on.
//!
//! ## Failure Boundary
//!
//! Structural problems (unreadable file, malformed JSON, a schema that
//! does not compile) are [`SchemaError`]s. A document that merely fails
//! its schema is not an error: [`SchemaValidator::validate`] returns the
//! violations and leaves the severity decision to the caller.

use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::path::InstancePath;

/// Default location of the municipal code schema, relative to the
/// repository root. Overridable at [`SchemaValidator`] construction.
pub const DEFAULT_SCHEMA_PATH: &str = "schemas/municipal_code_v1_1.schema.json";

/// Structural error while loading or compiling schema/document files.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid JSON text.
    #[error("invalid JSON in {path}: {source}")]
    MalformedJson {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The schema parsed as JSON but did not compile to a validator.
    #[error("schema {path} did not compile: {reason}")]
    SchemaBuild {
        /// Path of the offending schema file.
        path: PathBuf,
        /// Reason the engine rejected the schema.
        reason: String,
    },
}

/// A single reported mismatch between document and schema.
///
/// `Display` renders the report line used by the CLI:
/// `- <dotted.path>: <message>` (root path renders as an empty string
/// before the colon).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Violation {
    /// Location of the violation inside the document.
    pub path: InstancePath,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "- {}: {}", self.path, self.message)
    }
}

/// Read a file and parse it as JSON.
///
/// # Errors
///
/// Returns [`SchemaError::Io`] if the file cannot be read and
/// [`SchemaError::MalformedJson`] if its contents are not valid JSON.
pub fn load_json(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SchemaError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// A compiled Draft 2020-12 validator backed by the `jsonschema` crate.
///
/// The schema is loaded and compiled once at construction; the compiled
/// validator is reusable and `Send + Sync`.
#[derive(Debug)]
pub struct SchemaValidator {
    /// Where the schema was loaded from, for diagnostics.
    schema_path: PathBuf,
    validator: Validator,
}

impl SchemaValidator {
    /// Load and compile the schema at `path`.
    ///
    /// The schema is read fresh from disk on every construction — there
    /// is no caching across invocations.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] or [`SchemaError::MalformedJson`] if
    /// the file cannot be loaded, and [`SchemaError::SchemaBuild`] if
    /// the engine rejects the schema.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let schema = load_json(path)?;
        Self::from_value(&schema, path)
    }

    /// Compile an already-parsed schema value.
    ///
    /// `origin` names where the schema came from and appears in build
    /// diagnostics.
    pub fn from_value(schema: &Value, origin: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let origin = origin.as_ref();
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(schema)
            .map_err(|e| SchemaError::SchemaBuild {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            schema_path: origin.to_path_buf(),
            validator,
        })
    }

    /// Returns the path the schema was loaded from.
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Validate a document and return every violation, sorted.
    ///
    /// Sort key is `(path, message)`: the path order is the contract
    /// consumers rely on; the message tie-break keeps re-runs
    /// byte-identical when several violations share a location. An empty
    /// vector means the document conforms.
    pub fn validate(&self, instance: &Value) -> Vec<Violation> {
        let mut violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                path: InstancePath::from_json_pointer(&e.instance_path.to_string()),
                message: e.to_string(),
            })
            .collect();
        violations.sort();
        violations
    }
}
