mod min_max_scaler;
mod scaler;
mod scaler_adapter;
mod standard_scaler;

pub use min_max_scaler::MinMaxScaler;
pub use scaler::{Scaler, ScalerKind};
pub use scaler_adapter::FeatureScalerAdapter;
pub use standard_scaler::StandardScaler;
