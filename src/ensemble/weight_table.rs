use crate::ensemble::ScoringError;
use std::collections::BTreeMap;

/// Per-model combination weights.
///
/// Weights are finite and non-negative but are not normalized: the scorer
/// thresholds the raw weighted sum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N: Into<String>>(&mut self, id: N, weight: f64) -> Result<(), ScoringError> {
        let id = id.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(ScoringError::InvalidWeight {
                model: id,
                value: weight,
            });
        }
        self.weights.insert(id, weight);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<f64> {
        self.weights.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.weights.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.weights.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(id, w)| (id.as_str(), *w))
    }
}

impl<N: Into<String>> TryFrom<Vec<(N, f64)>> for WeightTable {
    type Error = ScoringError;

    fn try_from(pairs: Vec<(N, f64)>) -> Result<Self, Self::Error> {
        let mut table = WeightTable::new();
        for (id, weight) in pairs {
            table.insert(id, weight)?;
        }
        Ok(table)
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightTable {
    type Error = ScoringError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        WeightTable::try_from(map.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_weights_unnormalized() {
        let table = WeightTable::try_from(vec![("a", 0.7), ("b", 0.7)]).unwrap();
        let total: f64 = table.iter().map(|(_, w)| w).sum();
        assert!((total - 1.4).abs() < 1e-12);
        assert_eq!(table.get("a"), Some(0.7));
    }

    #[test]
    fn zero_weight_is_allowed() {
        let mut table = WeightTable::new();
        assert!(table.insert("silent", 0.0).is_ok());
        assert!(table.contains("silent"));
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let mut table = WeightTable::new();
        assert_eq!(
            table.insert("a", -0.1),
            Err(ScoringError::InvalidWeight {
                model: "a".into(),
                value: -0.1
            })
        );
        assert!(matches!(
            table.insert("b", f64::NAN),
            Err(ScoringError::InvalidWeight { .. })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn remove_drops_entry() {
        let mut table = WeightTable::try_from(vec![("a", 0.5), ("b", 0.5)]).unwrap();
        assert_eq!(table.remove("a"), Some(0.5));
        assert_eq!(table.ids().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(table.len(), 1);
    }
}
