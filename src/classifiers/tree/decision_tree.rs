use crate::classifiers::ProbabilisticClassifier;
use crate::classifiers::tree::TreeNode;
use crate::core::features::ScaledFeatureVector;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fitted CART classification tree. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionTree {
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(n_features: usize, nodes: Vec<TreeNode>) -> Self {
        Self { n_features, nodes }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("decision tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= self.n_features {
                        return Err(format!(
                            "node {i} splits on feature {feature} of {}",
                            self.n_features
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i} has a non-finite threshold"));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(format!("node {i} has invalid child index {child}"));
                        }
                    }
                }
                TreeNode::Leaf { class_distribution } => {
                    if class_distribution.len() != 2 {
                        return Err(format!("leaf {i} must hold two class weights"));
                    }
                    if class_distribution.iter().any(|w| !(*w >= 0.0 && w.is_finite()))
                        || class_distribution.iter().sum::<f64>() <= 0.0
                    {
                        return Err(format!("leaf {i} has an invalid class distribution"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks from the root to the leaf reached by `values`.
    pub fn leaf_for_values(&self, values: &[f64]) -> Option<&TreeNode> {
        let mut index = 0;
        loop {
            let node = self.nodes.get(index)?;
            if node.is_leaf() {
                return Some(node);
            }
            index = node.branch_for_values(values)?;
        }
    }
}

impl ProbabilisticClassifier for DecisionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn positive_probability(&self, row: &ScaledFeatureVector) -> f64 {
        self.leaf_for_values(row.values())
            .and_then(TreeNode::leaf_positive_probability)
            .unwrap_or(f64::NAN)
    }
}
