use std::sync::Arc;

/// Ordered list of feature names the scaler and classifiers were fitted on.
///
/// Every [`FeatureVector`](super::FeatureVector) handed to the scoring core must
/// carry exactly these names, in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Arc<[String]>,
}

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> FeatureSchema {
        FeatureSchema {
            names: names.into(),
        }
    }

    pub fn number_of_features(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn shared_names(&self) -> Arc<[String]> {
        Arc::clone(&self.names)
    }

    pub fn name_at_index(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of_feature(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns the first name that occurs more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        for (i, name) in self.names.iter().enumerate() {
            if self.names[..i].contains(name) {
                return Some(name);
            }
        }
        None
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSchema {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        FeatureSchema::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_and_index() {
        let schema: FeatureSchema = ["age", "grade", "scholarship"].into_iter().collect();
        assert_eq!(schema.number_of_features(), 3);
        assert_eq!(schema.index_of_feature("grade"), Some(1));
        assert_eq!(schema.index_of_feature("debt"), None);
        assert_eq!(schema.name_at_index(2), Some("scholarship"));
        assert_eq!(schema.name_at_index(3), None);
    }

    #[test]
    fn detects_duplicates() {
        let ok: FeatureSchema = ["a", "b"].into_iter().collect();
        assert!(ok.first_duplicate().is_none());

        let dup: FeatureSchema = ["a", "b", "a"].into_iter().collect();
        assert_eq!(dup.first_duplicate(), Some("a"));
    }

    #[test]
    fn shared_names_point_to_same_storage() {
        let schema: FeatureSchema = ["x"].into_iter().collect();
        let a = schema.shared_names();
        let b = schema.shared_names();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
