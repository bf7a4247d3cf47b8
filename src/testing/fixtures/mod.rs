use crate::bundle::ModelBundle;
use crate::core::features::{FeatureSchema, FeatureVector};

pub const STUDENT_FEATURES: [&str; 4] = [
    "admission_grade",
    "age_at_enrollment",
    "grade_1st_sem",
    "approved_2nd_sem",
];

/// A small three-model bundle over [`STUDENT_FEATURES`].
pub fn student_bundle_json() -> &'static str {
    r#"{
  "feature_names": ["admission_grade", "age_at_enrollment", "grade_1st_sem", "approved_2nd_sem"],
  "scaler": {"type": "standard", "mean": [130.0, 20.0, 12.0, 4.0], "scale": [15.0, 4.0, 2.0, 2.0]},
  "models": {
    "logistic": {
      "type": "logistic-regression",
      "params": {"coefficients": [0.5, -0.3, 1.0, 1.2], "intercept": 0.1}
    },
    "naive_bayes": {
      "type": "gaussian-naive-bayes",
      "params": {
        "class_priors": [0.4, 0.6],
        "means": [[-0.5, 0.3, -0.8, -0.9], [0.4, -0.2, 0.6, 0.7]],
        "variances": [[1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0]]
      }
    },
    "tree": {
      "type": "decision-tree",
      "params": {
        "n_features": 4,
        "nodes": [
          {"kind": "split", "feature": 3, "threshold": 0.0, "left": 1, "right": 2},
          {"kind": "leaf", "class_distribution": [8.0, 2.0]},
          {"kind": "leaf", "class_distribution": [1.0, 9.0]}
        ]
      }
    }
  },
  "weights": {"logistic": 0.4, "naive_bayes": 0.3, "tree": 0.3}
}"#
}

pub fn student_bundle() -> ModelBundle {
    ModelBundle::from_json_str(student_bundle_json()).expect("fixture bundle parses")
}

/// Two rows: a strong student first, a struggling one second.
pub fn student_rows(schema: &FeatureSchema) -> Vec<FeatureVector> {
    vec![
        FeatureVector::with_schema(schema, vec![150.0, 19.0, 15.0, 7.0]),
        FeatureVector::with_schema(schema, vec![110.0, 26.0, 8.0, 1.0]),
    ]
}

/// The rows of [`student_rows`] as an uploaded CSV, with an extra id column
/// and the feature columns out of order.
pub fn student_csv() -> &'static str {
    "student_id,grade_1st_sem,admission_grade,approved_2nd_sem,age_at_enrollment\n\
     s-001,15,150,7,19\n\
     s-002,8,110,1,26\n"
}
