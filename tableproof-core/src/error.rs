//! Error types for tableproof verifications

use std::path::PathBuf;
use thiserror::Error;

/// A failed verification.
///
/// Every message names the field, member, node or row that did not match so a
/// failing end-to-end test points straight at the offending data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Value mismatch for {subject}: expected {expected:?}, got {actual:?}")]
    ValueMismatch {
        subject: String,
        expected: String,
        actual: Option<String>,
    },

    #[error("Missing member: {member}")]
    MissingMember { member: String },

    #[error("Row count mismatch: expected {expected}, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("Cell mismatch at column {column}: expected {expected:?}, got {actual:?}")]
    CellMismatch {
        column: usize,
        expected: String,
        actual: Option<String>,
    },

    #[error("Row {row}: {source}")]
    InRow {
        row: usize,
        #[source]
        source: Box<VerifyError>,
    },

    #[error("Column mismatch for {context}: expected {expected:?}, got {actual:?}")]
    ColumnsMismatch {
        context: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Row data mismatch for {context}: expected {expected:?}, got {actual:?}")]
    RowsMismatch {
        context: String,
        expected: Vec<Vec<String>>,
        actual: Vec<Vec<String>>,
    },

    #[error("Missing column {column} with type {column_type}")]
    MissingColumnType { column: String, column_type: String },

    #[error("Missing node: {node}")]
    MissingNode { node: String },

    #[error("Adjacency mismatch for node {node}: expected {expected:?}, got {actual:?}")]
    AdjacencyMismatch {
        node: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Expected output to contain {needle:?}, but it doesn't. Output: {output}")]
    MissingText { needle: String, output: String },

    #[error("Expected output to NOT contain {needle:?}, but it does. Output: {output}")]
    UnexpectedText { needle: String, output: String },

    #[error("Failed to parse JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("Expected JSON {expected}, got something else. Output: {output}")]
    JsonShape { expected: String, output: String },

    #[error("Missing JSON key: {key}")]
    MissingJsonKey { key: String },

    #[error("JSON array length mismatch: expected {expected}, got {actual}")]
    JsonLengthMismatch { expected: usize, actual: usize },

    #[error("JSON array too short: expected at least {min}, got {actual}")]
    JsonTooShort { min: usize, actual: usize },

    #[error("No JSON object where {key:?} = {value:?}")]
    MissingJsonValue { key: String, value: String },

    #[error("Expected file to exist at {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Expected file at {} to be non-empty", path.display())]
    EmptyFile { path: PathBuf },

    #[error("I/O error on {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

impl VerifyError {
    /// Log the rejection and return it as an `Err`.
    pub fn reject<T>(self) -> VerifyResult<T> {
        tracing::debug!(error = %self, "verification rejected");
        Err(self)
    }

    /// Attach the index of the row that failed.
    pub fn in_row(self, row: usize) -> Self {
        VerifyError::InRow {
            row,
            source: Box::new(self),
        }
    }
}

/// Result type alias for verifications.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

// =============================================================================
// TESTS
// =============================================================================
