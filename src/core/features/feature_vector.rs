use crate::core::features::FeatureSchema;
use std::sync::Arc;

/// One raw input row: ordered, named numeric fields.
///
/// Rows built from the same [`FeatureSchema`] share its name storage, so a
/// batch of thousands of rows holds one copy of the names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Arc<[String]>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(names: Arc<[String]>, values: Vec<f64>) -> FeatureVector {
        FeatureVector { names, values }
    }

    pub fn with_schema(schema: &FeatureSchema, values: Vec<f64>) -> FeatureVector {
        FeatureVector::new(schema.shared_names(), values)
    }

    pub fn from_pairs<N, I>(pairs: I) -> FeatureVector
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let (names, values): (Vec<String>, Vec<f64>) =
            pairs.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        FeatureVector::new(names.into(), values)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn number_of_fields(&self) -> usize {
        self.values.len()
    }

    pub fn value_at_index(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn value_of(&self, name: &str) -> Option<f64> {
        let index = self.names.iter().position(|n| n == name)?;
        self.value_at_index(index)
    }
}

/// Output of the scaler: same arity as the input row, normalized values.
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledFeatureVector {
    values: Box<[f64]>,
}

impl ScaledFeatureVector {
    pub fn new(values: Vec<f64>) -> ScaledFeatureVector {
        ScaledFeatureVector {
            values: values.into_boxed_slice(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for ScaledFeatureVector {
    fn from(values: Vec<f64>) -> Self {
        ScaledFeatureVector::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_keeps_order() {
        let row = FeatureVector::from_pairs([("b", 2.0), ("a", 1.0)]);
        assert_eq!(row.names(), ["b".to_string(), "a".to_string()]);
        assert_eq!(row.values(), &[2.0, 1.0]);
        assert_eq!(row.value_of("a"), Some(1.0));
        assert_eq!(row.value_of("c"), None);
    }

    #[test]
    fn rows_from_schema_share_names() {
        let schema: FeatureSchema = ["x", "y"].into_iter().collect();
        let r1 = FeatureVector::with_schema(&schema, vec![1.0, 2.0]);
        let r2 = FeatureVector::with_schema(&schema, vec![3.0, 4.0]);
        assert!(std::ptr::eq(r1.names().as_ptr(), r2.names().as_ptr()));
        assert_eq!(r2.value_at_index(1), Some(4.0));
        assert_eq!(r2.value_at_index(2), None);
    }

    #[test]
    fn scaled_vector_is_read_only_view() {
        let scaled = ScaledFeatureVector::from(vec![0.5, -1.0]);
        assert_eq!(scaled.len(), 2);
        assert!(!scaled.is_empty());
        assert_eq!(scaled.values(), &[0.5, -1.0]);
    }
}
