mod error;
mod prediction_table;

pub use error::ReportError;
pub use prediction_table::{PredictionTable, ReportFormat};
