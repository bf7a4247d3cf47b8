use crate::core::features::ScaledFeatureVector;

/// A fitted binary classifier that can report a calibrated probability for
/// the positive class.
///
/// Implementations are immutable after construction and shared read-only
/// across scoring calls, hence the `Send + Sync` bound.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Number of features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Probability that `row` belongs to the positive class.
    fn positive_probability(&self, row: &ScaledFeatureVector) -> f64;

    /// Positive-class probability for each row of a batch, in row order.
    fn predict_positive_proba(&self, rows: &[ScaledFeatureVector]) -> Vec<f64> {
        rows.iter()
            .map(|row| self.positive_probability(row))
            .collect()
    }
}
