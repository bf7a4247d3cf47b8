use crate::classifiers::ProbabilisticClassifier;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Named, read-only set of fitted classifiers.
///
/// Iteration is in ascending id order so that every sum over models is
/// accumulated in the same order on every call.
#[derive(Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Box<dyn ProbabilisticClassifier>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model<N: Into<String>>(
        mut self,
        id: N,
        model: Box<dyn ProbabilisticClassifier>,
    ) -> Self {
        self.insert(id, model);
        self
    }

    /// Adds or replaces a model, returning the one previously registered under `id`.
    pub fn insert<N: Into<String>>(
        &mut self,
        id: N,
        model: Box<dyn ProbabilisticClassifier>,
    ) -> Option<Box<dyn ProbabilisticClassifier>> {
        self.models.insert(id.into(), model)
    }

    pub fn get(&self, id: &str) -> Option<&dyn ProbabilisticClassifier> {
        self.models.get(id).map(|m| m.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ProbabilisticClassifier)> {
        self.models.iter().map(|(id, m)| (id.as_str(), m.as_ref()))
    }
}

impl Debug for ModelRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("ids", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}
