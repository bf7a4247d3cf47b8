mod error;
mod explanation;
mod model_registry;
mod prediction;
mod weight_table;
mod weighted_ensemble;

pub use error::ScoringError;
pub use explanation::{ModelConfidence, ModelRanking};
pub use model_registry::ModelRegistry;
pub use prediction::{DECISION_THRESHOLD, EnsembleResult, Outcome, PredictionBatch, RowPrediction};
pub use weight_table::WeightTable;
pub use weighted_ensemble::WeightedEnsemble;
