use crate::core::features::ScaledFeatureVector;
use crate::ensemble::{
    EnsembleResult, ModelRegistry, Outcome, PredictionBatch, RowPrediction, ScoringError,
    WeightTable,
};
use tracing::{debug, warn};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Combines the registry's probabilities with a raw weighted sum and labels
/// each row against the fixed decision threshold.
///
/// Holds only read-only state; `predict` can be called concurrently.
#[derive(Debug)]
pub struct WeightedEnsemble {
    registry: ModelRegistry,
    weights: WeightTable,
}

impl WeightedEnsemble {
    /// Fails when the registry is empty or a registered model has no weight.
    ///
    /// Weights for ids absent from the registry are ignored.
    pub fn new(registry: ModelRegistry, weights: WeightTable) -> Result<Self, ScoringError> {
        if registry.is_empty() {
            return Err(ScoringError::EmptyRegistry);
        }
        let ensemble = Self { registry, weights };
        ensemble.check_weights()?;

        for id in ensemble.weights.ids() {
            if !ensemble.registry.contains(id) {
                warn!(model = id, "weight given for a model that is not registered; ignoring");
            }
        }
        let total = ensemble.weight_sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warn!(
                weight_sum = total,
                "ensemble weights do not sum to 1; scores are thresholded without normalization"
            );
        }
        Ok(ensemble)
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Sum of the weights of registered models.
    pub fn weight_sum(&self) -> f64 {
        self.registry
            .ids()
            .filter_map(|id| self.weights.get(id))
            .sum()
    }

    fn check_weights(&self) -> Result<(), ScoringError> {
        match self.registry.ids().find(|id| !self.weights.contains(id)) {
            Some(id) => Err(ScoringError::MissingWeight {
                model: id.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_arity(&self, rows: &[ScaledFeatureVector]) -> Result<(), ScoringError> {
        for (id, model) in self.registry.iter() {
            let expected = model.n_features();
            if let Some(row) = rows.iter().position(|r| r.len() != expected) {
                return Err(ScoringError::SchemaMismatch {
                    row,
                    reason: format!(
                        "model '{id}' expects {expected} features, row has {}",
                        rows[row].len()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Collects every model's positive-class probabilities for `rows`.
    pub fn predict_probabilities(
        &self,
        rows: &[ScaledFeatureVector],
    ) -> Result<PredictionBatch, ScoringError> {
        if rows.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }
        self.check_arity(rows)?;

        let mut batch = PredictionBatch::new(rows.len());
        for (id, model) in self.registry.iter() {
            batch.insert(id, model.predict_positive_proba(rows))?;
        }
        Ok(batch)
    }

    /// Scores a batch: weighted sum per row, thresholded into an [`Outcome`],
    /// alongside the unweighted mean confidence.
    pub fn predict(&self, rows: &[ScaledFeatureVector]) -> Result<EnsembleResult, ScoringError> {
        if rows.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }
        self.check_weights()?;

        let batch = self.predict_probabilities(rows)?;

        let mut scores = vec![0.0; batch.n_rows()];
        for (id, probabilities) in batch.iter() {
            let weight = self
                .weights
                .get(id)
                .ok_or_else(|| ScoringError::MissingWeight {
                    model: id.to_string(),
                })?;
            for (score, p) in scores.iter_mut().zip(probabilities) {
                *score += weight * p;
            }
        }

        let mut predictions = Vec::with_capacity(scores.len());
        for (row, weighted_score) in scores.into_iter().enumerate() {
            let mean_confidence_pct = batch
                .mean_confidence_pct(row)
                .ok_or(ScoringError::EmptyRegistry)?;
            predictions.push(RowPrediction {
                outcome: Outcome::from_weighted_score(weighted_score),
                weighted_score,
                mean_confidence_pct,
            });
        }

        debug!(
            rows = predictions.len(),
            models = batch.n_models(),
            graduates = predictions
                .iter()
                .filter(|p| p.outcome == Outcome::Graduate)
                .count(),
            "scored batch"
        );
        Ok(EnsembleResult::new(batch, predictions))
    }
}
