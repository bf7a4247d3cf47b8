use crate::core::features::{FeatureSchema, FeatureVector, ScaledFeatureVector};
use crate::ensemble::{EnsembleResult, ModelRanking, ScoringError, WeightedEnsemble};
use crate::preprocessing::FeatureScalerAdapter;

/// Raw rows in, labelled rows out: the scaler adapter followed by the
/// weighted ensemble.
///
/// Built once from a [`ModelBundle`](crate::bundle::ModelBundle) and shared
/// read-only for the rest of the process.
#[derive(Debug)]
pub struct Predictor {
    scaler: FeatureScalerAdapter,
    ensemble: WeightedEnsemble,
}

impl Predictor {
    pub fn new(scaler: FeatureScalerAdapter, ensemble: WeightedEnsemble) -> Self {
        Self { scaler, ensemble }
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.scaler.schema()
    }

    pub fn scaler(&self) -> &FeatureScalerAdapter {
        &self.scaler
    }

    pub fn ensemble(&self) -> &WeightedEnsemble {
        &self.ensemble
    }

    pub fn scale(&self, rows: &[FeatureVector]) -> Result<Vec<ScaledFeatureVector>, ScoringError> {
        self.scaler.scale(rows)
    }

    /// Scores a whole batch; any invalid row fails the entire call.
    pub fn predict(&self, rows: &[FeatureVector]) -> Result<EnsembleResult, ScoringError> {
        if rows.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }
        let scaled = self.scale(rows)?;
        self.ensemble.predict(&scaled)
    }

    pub fn predict_one(&self, row: &FeatureVector) -> Result<EnsembleResult, ScoringError> {
        self.predict(std::slice::from_ref(row))
    }

    /// Scores a batch and ranks the models by their batch-mean confidence.
    pub fn explain(
        &self,
        rows: &[FeatureVector],
    ) -> Result<(EnsembleResult, ModelRanking), ScoringError> {
        let result = self.predict(rows)?;
        let ranking = result.ranking()?;
        Ok((result, ranking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::Outcome;
    use crate::testing::fixtures::{student_bundle, student_rows};

    #[test]
    fn labels_fixture_students() {
        let predictor = student_bundle().into_predictor().unwrap();
        let rows = student_rows(predictor.schema());
        let result = predictor.predict(&rows).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.outcomes(), vec![Outcome::Graduate, Outcome::Dropout]);

        let tree = result.probabilities().probabilities_for("tree").unwrap();
        assert_eq!(tree, &[0.9, 0.2]);
        for pct in result.mean_confidence_pct() {
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn single_row_matches_its_batch_counterpart() {
        let predictor = student_bundle().into_predictor().unwrap();
        let rows = student_rows(predictor.schema());
        let batch = predictor.predict(&rows).unwrap();
        let single = predictor.predict_one(&rows[1]).unwrap();
        assert_eq!(single.rows()[0], batch.rows()[1]);
    }

    #[test]
    fn schema_mismatch_fails_the_batch() {
        let predictor = student_bundle().into_predictor().unwrap();
        let mut rows = student_rows(predictor.schema());
        rows.push(FeatureVector::from_pairs([("admission_grade", 120.0)]));
        assert!(matches!(
            predictor.predict(&rows),
            Err(ScoringError::SchemaMismatch { row: 2, .. })
        ));
    }

    #[test]
    fn empty_input_is_empty_batch() {
        let predictor = student_bundle().into_predictor().unwrap();
        assert_eq!(predictor.predict(&[]), Err(ScoringError::EmptyBatch));
        assert!(matches!(predictor.explain(&[]), Err(ScoringError::EmptyBatch)));
    }

    #[test]
    fn explain_ranks_all_models() {
        let predictor = student_bundle().into_predictor().unwrap();
        let rows = student_rows(predictor.schema());
        let (result, ranking) = predictor.explain(&rows).unwrap();
        assert_eq!(ranking.entries().len(), 3);

        let best = ranking.most_confident().unwrap();
        let best_mean = result
            .probabilities()
            .probabilities_for(&best.model)
            .map(|p| p.iter().sum::<f64>() / p.len() as f64 * 100.0)
            .unwrap();
        assert!((best.mean_confidence_pct - best_mean).abs() <= 0.005 + 1e-9);
        for pair in ranking.entries().windows(2) {
            assert!(pair[0].mean_confidence_pct >= pair[1].mean_confidence_pct);
        }
    }
}
