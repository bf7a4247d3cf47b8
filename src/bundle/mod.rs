mod error;
mod model_bundle;

pub use error::BundleError;
pub use model_bundle::ModelBundle;
