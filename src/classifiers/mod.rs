pub mod bayes;
pub mod classifier;
pub mod classifier_spec;
pub mod linear;
pub mod tree;

pub use classifier::ProbabilisticClassifier;
pub use classifier_spec::{ClassifierKind, ClassifierSpec, build_classifier};
