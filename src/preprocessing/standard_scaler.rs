use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fitted standardization: `(x - mean) / scale`.
///
/// A zero `scale` marks a constant feature and is treated as 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    pub fn check_arity(&self, n_features: usize) -> Result<(), String> {
        if self.mean.len() != n_features || self.scale.len() != n_features {
            return Err(format!(
                "standard scaler has {} means and {} scales for {} features",
                self.mean.len(),
                self.scale.len(),
                n_features
            ));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err("standard scaler parameters must be finite".to_string());
        }
        Ok(())
    }

    #[inline]
    pub fn transform_in_place(&self, values: &mut [f64]) {
        for ((x, &mean), &scale) in values.iter_mut().zip(&self.mean).zip(&self.scale) {
            let s = if scale == 0.0 { 1.0 } else { scale };
            *x = (*x - mean) / s;
        }
    }
}
