use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One node of a fitted CART tree stored as a flat array.
///
/// Children are referenced by index into the same array and always point
/// forward, so traversal from the root terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Weighted class counts at the leaf, `[negative, positive]`.
        class_distribution: Vec<f64>,
    },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Branch taken by `values`: left when `values[feature] <= threshold`.
    #[inline]
    pub fn branch_for_values(&self, values: &[f64]) -> Option<usize> {
        match *self {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                let value = *values.get(feature)?;
                Some(if value <= threshold { left } else { right })
            }
            TreeNode::Leaf { .. } => None,
        }
    }

    pub fn leaf_positive_probability(&self) -> Option<f64> {
        match self {
            TreeNode::Leaf { class_distribution } => {
                let positive = *class_distribution.get(1)?;
                let total: f64 = class_distribution.iter().sum();
                Some(positive / total)
            }
            TreeNode::Split { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_value_goes_left() {
        let node = TreeNode::Split {
            feature: 0,
            threshold: 1.5,
            left: 1,
            right: 2,
        };
        assert_eq!(node.branch_for_values(&[1.5]), Some(1));
        assert_eq!(node.branch_for_values(&[1.6]), Some(2));
        assert_eq!(node.branch_for_values(&[]), None);
        assert!(!node.is_leaf());
    }

    #[test]
    fn leaf_probability_is_positive_share() {
        let leaf = TreeNode::Leaf {
            class_distribution: vec![3.0, 1.0],
        };
        assert!(leaf.is_leaf());
        assert_eq!(leaf.leaf_positive_probability(), Some(0.25));
        assert_eq!(leaf.branch_for_values(&[0.0]), None);
    }
}
