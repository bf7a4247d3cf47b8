use thiserror::Error;

/// Failures of a scoring call or of assembling the scorer.
///
/// Every variant is a local validation failure; none is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("row {row} does not match the feature schema: {reason}")]
    SchemaMismatch { row: usize, reason: String },

    #[error("model '{model}' has no entry in the weight table")]
    MissingWeight { model: String },

    #[error("cannot score an empty batch")]
    EmptyBatch,

    #[error("model '{model}' returned probability {value} for row {row}, outside [0, 1]")]
    ProbabilityOutOfRange {
        model: String,
        row: usize,
        value: f64,
    },

    #[error("model '{model}' returned {found} probabilities for a batch of {expected} rows")]
    ProbabilityCountMismatch {
        model: String,
        expected: usize,
        found: usize,
    },

    #[error("the model registry is empty")]
    EmptyRegistry,

    #[error("weight for model '{model}' must be finite and non-negative, got {value}")]
    InvalidWeight { model: String, value: f64 },
}
