use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input has no header line")]
    MissingHeader,

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record must be a JSON object")]
    NotAnObject,

    #[error("field '{0}' must be a number or a boolean")]
    NonNumericField(String),
}
