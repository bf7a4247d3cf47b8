use crate::core::features::{FeatureSchema, FeatureVector, ScaledFeatureVector};
use crate::ensemble::ScoringError;
use crate::preprocessing::Scaler;

/// Applies the fitted [`Scaler`] to raw rows after checking each row against
/// the schema the scaler was fitted on.
#[derive(Debug, Clone)]
pub struct FeatureScalerAdapter {
    schema: FeatureSchema,
    scaler: Scaler,
}

impl FeatureScalerAdapter {
    pub fn new(schema: FeatureSchema, scaler: Scaler) -> Self {
        Self { schema, scaler }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /// Scales every row, preserving count and order.
    ///
    /// Fails on the first row whose field names, order or count differ from
    /// the schema. An empty input yields an empty output.
    pub fn scale(&self, rows: &[FeatureVector]) -> Result<Vec<ScaledFeatureVector>, ScoringError> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                self.check_row(i, row)?;
                Ok::<_, ScoringError>(ScaledFeatureVector::new(
                    self.scaler.transform(row.values()),
                ))
            })
            .collect()
    }

    pub fn check_row(&self, index: usize, row: &FeatureVector) -> Result<(), ScoringError> {
        let expected = self.schema.names();
        let names = row.names();

        if names.len() != expected.len() || row.number_of_fields() != expected.len() {
            return Err(ScoringError::SchemaMismatch {
                row: index,
                reason: format!(
                    "expected {} fields, found {} names and {} values",
                    expected.len(),
                    names.len(),
                    row.number_of_fields()
                ),
            });
        }

        if let Some((pos, (found, wanted))) = names
            .iter()
            .zip(expected)
            .enumerate()
            .find(|(_, (found, wanted))| found != wanted)
        {
            return Err(ScoringError::SchemaMismatch {
                row: index,
                reason: format!("field {pos} is '{found}', expected '{wanted}'"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::StandardScaler;

    fn adapter() -> FeatureScalerAdapter {
        let schema: FeatureSchema = ["grade", "age"].into_iter().collect();
        let scaler = Scaler::Standard(StandardScaler::new(vec![12.0, 20.0], vec![2.0, 4.0]));
        FeatureScalerAdapter::new(schema, scaler)
    }

    #[test]
    fn single_row_keeps_schema_arity() {
        let a = adapter();
        let row = FeatureVector::with_schema(a.schema(), vec![14.0, 18.0]);
        let out = a.scale(&[row]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), a.schema().number_of_features());
        assert_eq!(out[0].values(), &[1.0, -0.5]);
    }

    #[test]
    fn any_valid_row_scales_to_one_row_of_schema_arity() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(3);
        let a = adapter();
        for _ in 0..100 {
            let values = vec![rng.random_range(0.0..200.0), rng.random_range(15.0..80.0)];
            let out = a.scale(&[FeatureVector::with_schema(a.schema(), values)]).unwrap();
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].len(), 2);
        }
    }

    #[test]
    fn preserves_row_order() {
        let a = adapter();
        let rows: Vec<_> = [10.0, 12.0, 16.0]
            .into_iter()
            .map(|g| FeatureVector::with_schema(a.schema(), vec![g, 20.0]))
            .collect();
        let out = a.scale(&rows).unwrap();
        let grades: Vec<f64> = out.iter().map(|r| r.values()[0]).collect();
        assert_eq!(grades, vec![-1.0, 0.0, 2.0]);
    }

    #[test]
    fn each_row_is_independent_of_its_neighbours() {
        let a = adapter();
        let target = FeatureVector::with_schema(a.schema(), vec![13.0, 22.0]);
        let alone = a.scale(std::slice::from_ref(&target)).unwrap();
        let other = FeatureVector::with_schema(a.schema(), vec![99.0, 99.0]);
        let together = a.scale(&[other, target]).unwrap();
        assert_eq!(alone[0], together[1]);
    }

    #[test]
    fn wrong_count_is_schema_mismatch() {
        let a = adapter();
        let row = FeatureVector::from_pairs([("grade", 1.0)]);
        let err = a.scale(&[row]).unwrap_err();
        assert!(matches!(err, ScoringError::SchemaMismatch { row: 0, .. }));
    }

    #[test]
    fn wrong_names_or_order_is_schema_mismatch() {
        let a = adapter();
        let good = FeatureVector::with_schema(a.schema(), vec![1.0, 2.0]);
        let swapped = FeatureVector::from_pairs([("age", 2.0), ("grade", 1.0)]);
        let err = a.scale(&[good, swapped]).unwrap_err();
        match err {
            ScoringError::SchemaMismatch { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("'age'"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn names_without_values_are_rejected() {
        let a = adapter();
        let row = FeatureVector::with_schema(a.schema(), vec![1.0]);
        assert!(a.scale(&[row]).is_err());
    }

    #[test]
    fn empty_input_scales_to_empty_output() {
        assert!(adapter().scale(&[]).unwrap().is_empty());
    }
}
