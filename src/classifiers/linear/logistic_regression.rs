use crate::classifiers::ProbabilisticClassifier;
use crate::core::features::ScaledFeatureVector;
use crate::utils::math::{dot, sigmoid};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fitted binary logistic regression: `P(positive) = σ(w·x + b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("logistic regression has no coefficients".to_string());
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("logistic regression parameters must be finite".to_string());
        }
        Ok(())
    }

    #[inline]
    pub fn decision_function(&self, values: &[f64]) -> f64 {
        dot(&self.coefficients, values) + self.intercept
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn positive_probability(&self, row: &ScaledFeatureVector) -> f64 {
        sigmoid(self.decision_function(row.values()))
    }
}
