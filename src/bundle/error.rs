use crate::ensemble::ScoringError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read model bundle {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed model bundle: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid feature list: {0}")]
    InvalidFeatures(String),

    #[error("invalid scaler: {0}")]
    InvalidScaler(String),

    #[error("invalid model '{model}': {reason}")]
    InvalidModel { model: String, reason: String },

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
