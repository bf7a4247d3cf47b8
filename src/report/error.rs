use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{rows} input rows but {predictions} predictions")]
    LengthMismatch { rows: usize, predictions: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
