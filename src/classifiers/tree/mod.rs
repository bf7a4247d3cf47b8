mod decision_tree;
mod random_forest;
mod tree_node;

pub use decision_tree::DecisionTree;
pub use random_forest::RandomForest;
pub use tree_node::TreeNode;
