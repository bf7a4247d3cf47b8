pub mod fixed_probabilities;

pub use fixed_probabilities::FixedProbabilities;
