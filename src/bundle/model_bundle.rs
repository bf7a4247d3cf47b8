use crate::bundle::BundleError;
use crate::classifiers::{ClassifierSpec, build_classifier};
use crate::core::features::FeatureSchema;
use crate::ensemble::{ModelRegistry, WeightTable, WeightedEnsemble};
use crate::preprocessing::{FeatureScalerAdapter, Scaler};
use crate::tasks::Predictor;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// The persisted artifact: fitted classifiers, their weights, the fitted
/// scaler and the ordered feature names, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelBundle {
    /// Feature names in the order the scaler and every model expect them.
    pub feature_names: Vec<String>,
    pub scaler: Scaler,
    pub models: BTreeMap<String, ClassifierSpec>,
    /// Combination weights; not required to sum to 1.
    pub weights: BTreeMap<String, f64>,
}

impl ModelBundle {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BundleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BundleError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, BundleError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, BundleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON Schema describing the bundle format.
    pub fn json_schema() -> Schema {
        schema_for!(ModelBundle)
    }

    pub fn schema(&self) -> FeatureSchema {
        FeatureSchema::new(self.feature_names.clone())
    }

    /// Structural checks that do not require building the models.
    pub fn validate(&self) -> Result<(), BundleError> {
        let schema = self.schema();
        let n_features = schema.number_of_features();
        if n_features == 0 {
            return Err(BundleError::InvalidFeatures("no feature names".into()));
        }
        if let Some(name) = schema.names().iter().find(|n| n.trim().is_empty()) {
            return Err(BundleError::InvalidFeatures(format!(
                "blank feature name '{name}'"
            )));
        }
        if let Some(dup) = schema.first_duplicate() {
            return Err(BundleError::InvalidFeatures(format!(
                "duplicate feature name '{dup}'"
            )));
        }

        self.scaler
            .check_arity(n_features)
            .map_err(BundleError::InvalidScaler)?;

        for (id, spec) in &self.models {
            spec.validate().map_err(|reason| BundleError::InvalidModel {
                model: id.clone(),
                reason,
            })?;
            if spec.n_features() != n_features {
                return Err(BundleError::InvalidModel {
                    model: id.clone(),
                    reason: format!(
                        "{} expects {} features, bundle lists {}",
                        spec.kind(),
                        spec.n_features(),
                        n_features
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validates the bundle and assembles the read-only scoring pipeline.
    pub fn into_predictor(self) -> Result<Predictor, BundleError> {
        self.validate()?;
        let schema = self.schema();

        let weights = WeightTable::try_from(self.weights)?;
        let mut registry = ModelRegistry::new();
        for (id, spec) in self.models {
            registry.insert(id, build_classifier(spec));
        }
        let ensemble = WeightedEnsemble::new(registry, weights)?;

        info!(
            features = schema.number_of_features(),
            models = ensemble.registry().len(),
            scaler = %self.scaler.kind(),
            "model bundle loaded"
        );
        let scaler = FeatureScalerAdapter::new(schema, self.scaler);
        Ok(Predictor::new(scaler, ensemble))
    }
}
