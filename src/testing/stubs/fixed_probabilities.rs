use crate::classifiers::ProbabilisticClassifier;
use crate::core::features::ScaledFeatureVector;

/// Classifier stub that ignores its input and returns a canned probability
/// vector for every batch.
pub struct FixedProbabilities {
    probabilities: Vec<f64>,
    n_features: usize,
}

impl FixedProbabilities {
    pub fn new(probabilities: Vec<f64>) -> Self {
        Self {
            probabilities,
            n_features: 1,
        }
    }

    pub fn with_n_features(mut self, n_features: usize) -> Self {
        self.n_features = n_features;
        self
    }
}

impl ProbabilisticClassifier for FixedProbabilities {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn positive_probability(&self, _row: &ScaledFeatureVector) -> f64 {
        self.probabilities.first().copied().unwrap_or(f64::NAN)
    }

    fn predict_positive_proba(&self, _rows: &[ScaledFeatureVector]) -> Vec<f64> {
        self.probabilities.clone()
    }
}
