use crate::classifiers::ProbabilisticClassifier;
use crate::classifiers::tree::DecisionTree;
use crate::core::features::ScaledFeatureVector;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Soft-voting forest: the mean of its trees' positive-class probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>) -> Self {
        Self { trees }
    }

    pub fn validate(&self) -> Result<(), String> {
        let Some(first) = self.trees.first() else {
            return Err("random forest has no trees".to_string());
        };
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| format!("tree {i}: {e}"))?;
            if tree.n_features != first.n_features {
                return Err(format!(
                    "tree {i} expects {} features, tree 0 expects {}",
                    tree.n_features, first.n_features
                ));
            }
        }
        Ok(())
    }
}

impl ProbabilisticClassifier for RandomForest {
    fn n_features(&self) -> usize {
        self.trees.first().map_or(0, |t| t.n_features)
    }

    fn positive_probability(&self, row: &ScaledFeatureVector) -> f64 {
        let sum: f64 = self
            .trees
            .iter()
            .map(|tree| tree.positive_probability(row))
            .sum();
        sum / self.trees.len() as f64
    }
}
