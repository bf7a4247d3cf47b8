use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// Fitted min-max scaling of each column into `feature_range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MinMaxScaler {
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
    #[serde(default = "default_feature_range")]
    pub feature_range: (f64, f64),
}

impl MinMaxScaler {
    pub fn new(data_min: Vec<f64>, data_max: Vec<f64>) -> Self {
        Self {
            data_min,
            data_max,
            feature_range: default_feature_range(),
        }
    }

    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.feature_range = (lo, hi);
        self
    }

    pub fn check_arity(&self, n_features: usize) -> Result<(), String> {
        if self.data_min.len() != n_features || self.data_max.len() != n_features {
            return Err(format!(
                "min-max scaler has {} minimums and {} maximums for {} features",
                self.data_min.len(),
                self.data_max.len(),
                n_features
            ));
        }
        let (lo, hi) = self.feature_range;
        if !(lo < hi) {
            return Err(format!("invalid feature range ({lo}, {hi})"));
        }
        if let Some(i) = self
            .data_min
            .iter()
            .zip(&self.data_max)
            .position(|(min, max)| min > max)
        {
            return Err(format!("data_min exceeds data_max at feature {i}"));
        }
        Ok(())
    }

    #[inline]
    pub fn transform_in_place(&self, values: &mut [f64]) {
        let (lo, hi) = self.feature_range;
        for ((x, &min), &max) in values.iter_mut().zip(&self.data_min).zip(&self.data_max) {
            let range = max - min;
            let range = if range == 0.0 { 1.0 } else { range };
            *x = (*x - min) / range * (hi - lo) + lo;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_observed_range_onto_unit_interval() {
        let scaler = MinMaxScaler::new(vec![0.0, 10.0], vec![200.0, 20.0]);
        let mut row = [150.0, 10.0];
        scaler.transform_in_place(&mut row);
        assert_eq!(row, [0.75, 0.0]);
    }

    #[test]
    fn custom_range() {
        let scaler = MinMaxScaler::new(vec![0.0], vec![4.0]).with_range(-1.0, 1.0);
        let mut row = [3.0];
        scaler.transform_in_place(&mut row);
        assert_eq!(row, [0.5]);
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(MinMaxScaler::new(vec![2.0], vec![1.0]).check_arity(1).is_err());
        assert!(
            MinMaxScaler::new(vec![0.0], vec![1.0])
                .with_range(1.0, 1.0)
                .check_arity(1)
                .is_err()
        );
    }
}
