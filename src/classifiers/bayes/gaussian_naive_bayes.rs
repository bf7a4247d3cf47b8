use crate::classifiers::ProbabilisticClassifier;
use crate::core::features::ScaledFeatureVector;
use crate::utils::math::log_sum_exp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Index of the positive ("Graduate") class in every per-class parameter list.
pub const POSITIVE_CLASS: usize = 1;

/// Fitted Gaussian naive Bayes over two classes.
///
/// `means[c][j]` and `variances[c][j]` describe feature `j` under class `c`.
/// `var_smoothing` is added to every variance before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GaussianNaiveBayes {
    pub class_priors: Vec<f64>,
    pub means: Vec<Vec<f64>>,
    pub variances: Vec<Vec<f64>>,
    #[serde(default)]
    pub var_smoothing: f64,
}

impl GaussianNaiveBayes {
    pub fn new(class_priors: Vec<f64>, means: Vec<Vec<f64>>, variances: Vec<Vec<f64>>) -> Self {
        Self {
            class_priors,
            means,
            variances,
            var_smoothing: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.class_priors.len() != 2 || self.means.len() != 2 || self.variances.len() != 2 {
            return Err("gaussian naive bayes needs parameters for exactly two classes".into());
        }
        if self.class_priors.iter().any(|p| !(*p > 0.0 && *p <= 1.0)) {
            return Err("class priors must lie in (0, 1]".into());
        }
        let n = self.means[0].len();
        if n == 0 {
            return Err("gaussian naive bayes has no features".into());
        }
        for c in 0..2 {
            if self.means[c].len() != n || self.variances[c].len() != n {
                return Err(format!("class {c} parameters do not have {n} features"));
            }
            if self.variances[c]
                .iter()
                .any(|v| !(v + self.var_smoothing > 0.0))
            {
                return Err(format!("class {c} has a non-positive variance"));
            }
        }
        Ok(())
    }

    fn joint_log_likelihood(&self, class: usize, values: &[f64]) -> f64 {
        let mut acc = libm::log(self.class_priors[class]);
        for ((&x, &mu), &var) in values
            .iter()
            .zip(&self.means[class])
            .zip(&self.variances[class])
        {
            let var = var + self.var_smoothing;
            acc -= 0.5 * libm::log(2.0 * PI * var);
            acc -= 0.5 * (x - mu) * (x - mu) / var;
        }
        acc
    }
}

impl ProbabilisticClassifier for GaussianNaiveBayes {
    fn n_features(&self) -> usize {
        self.means.first().map_or(0, Vec::len)
    }

    fn positive_probability(&self, row: &ScaledFeatureVector) -> f64 {
        let jll = [
            self.joint_log_likelihood(0, row.values()),
            self.joint_log_likelihood(1, row.values()),
        ];
        let norm = log_sum_exp(&jll);
        libm::exp(jll[POSITIVE_CLASS] - norm)
    }
}
