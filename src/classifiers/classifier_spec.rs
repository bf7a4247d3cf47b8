use crate::classifiers::ProbabilisticClassifier;
use crate::classifiers::bayes::GaussianNaiveBayes;
use crate::classifiers::linear::LogisticRegression;
use crate::classifiers::tree::{DecisionTree, RandomForest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Serialized parameters of one fitted classifier, tagged by family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ClassifierKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ClassifierSpec {
    #[strum_discriminants(strum(
        message = "Logistic Regression",
        detailed_message = "Sigmoid of a linear margin."
    ))]
    LogisticRegression(LogisticRegression),
    #[strum_discriminants(strum(
        message = "Gaussian Naive Bayes",
        detailed_message = "Per-class Gaussian likelihoods assuming feature independence."
    ))]
    GaussianNaiveBayes(GaussianNaiveBayes),
    #[strum_discriminants(strum(
        message = "Decision Tree",
        detailed_message = "CART tree; leaf class shares are the probabilities."
    ))]
    DecisionTree(DecisionTree),
    #[strum_discriminants(strum(
        message = "Random Forest",
        detailed_message = "Mean probability over CART trees."
    ))]
    RandomForest(RandomForest),
}

impl ClassifierSpec {
    pub fn kind(&self) -> ClassifierKind {
        self.into()
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            ClassifierSpec::LogisticRegression(m) => m.validate(),
            ClassifierSpec::GaussianNaiveBayes(m) => m.validate(),
            ClassifierSpec::DecisionTree(m) => m.validate(),
            ClassifierSpec::RandomForest(m) => m.validate(),
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            ClassifierSpec::LogisticRegression(m) => m.n_features(),
            ClassifierSpec::GaussianNaiveBayes(m) => m.n_features(),
            ClassifierSpec::DecisionTree(m) => m.n_features(),
            ClassifierSpec::RandomForest(m) => m.n_features(),
        }
    }
}

pub fn build_classifier(spec: ClassifierSpec) -> Box<dyn ProbabilisticClassifier> {
    match spec {
        ClassifierSpec::LogisticRegression(m) => Box::new(m),
        ClassifierSpec::GaussianNaiveBayes(m) => Box::new(m),
        ClassifierSpec::DecisionTree(m) => Box::new(m),
        ClassifierSpec::RandomForest(m) => Box::new(m),
    }
}
