use crate::preprocessing::{MinMaxScaler, StandardScaler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, IntoStaticStr};

/// A fitted, deterministic per-column transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[strum_discriminants(name(ScalerKind))]
#[strum_discriminants(derive(Display, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum Scaler {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
    Identity,
}

impl Scaler {
    pub fn kind(&self) -> ScalerKind {
        self.into()
    }

    pub fn check_arity(&self, n_features: usize) -> Result<(), String> {
        match self {
            Scaler::Standard(s) => s.check_arity(n_features),
            Scaler::MinMax(s) => s.check_arity(n_features),
            Scaler::Identity => Ok(()),
        }
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        let mut out = values.to_vec();
        match self {
            Scaler::Standard(s) => s.transform_in_place(&mut out),
            Scaler::MinMax(s) => s.transform_in_place(&mut out),
            Scaler::Identity => {}
        }
        out
    }
}
