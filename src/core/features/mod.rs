mod feature_schema;
mod feature_vector;

pub use feature_schema::FeatureSchema;
pub use feature_vector::{FeatureVector, ScaledFeatureVector};
