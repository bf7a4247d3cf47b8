use crate::ensemble::{PredictionBatch, ScoringError};
use crate::utils::math::{mean, round_to};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfidence {
    pub model: String,
    /// Mean positive-class probability over the batch, in percent, 2 decimals.
    pub mean_confidence_pct: f64,
}

/// Models ordered by their batch-mean confidence, highest first.
///
/// Purely descriptive; it does not feed back into any row's decision. Ties
/// keep ascending model id order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRanking {
    entries: Vec<ModelConfidence>,
}

impl ModelRanking {
    pub fn from_batch(batch: &PredictionBatch) -> std::result::Result<Self, ScoringError> {
        if batch.n_rows() == 0 {
            return Err(ScoringError::EmptyBatch);
        }
        if batch.n_models() == 0 {
            return Err(ScoringError::EmptyRegistry);
        }

        let mut entries = Vec::with_capacity(batch.n_models());
        for (model, probabilities) in batch.iter() {
            let Some(m) = mean(probabilities) else {
                return Err(ScoringError::EmptyBatch);
            };
            entries.push(ModelConfidence {
                model: model.to_string(),
                mean_confidence_pct: round_to(m * 100.0, 2),
            });
        }
        entries.sort_by(|a, b| b.mean_confidence_pct.total_cmp(&a.mean_confidence_pct));

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ModelConfidence] {
        &self.entries
    }

    pub fn most_confident(&self) -> Option<&ModelConfidence> {
        self.entries.first()
    }
}

impl Display for ModelRanking {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let width = self
            .entries
            .iter()
            .map(|e| e.model.len())
            .max()
            .unwrap_or(0)
            .max("model".len());
        writeln!(f, "{:<width$}  confidence_pct", "model")?;
        for e in &self.entries {
            writeln!(f, "{:<width$}  {:.2}", e.model, e.mean_confidence_pct)?;
        }
        if let Some(best) = self.most_confident() {
            write!(
                f,
                "most confident: {} ({:.2}%)",
                best.model, best.mean_confidence_pct
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(models: &[(&str, Vec<f64>)]) -> PredictionBatch {
        let n = models.first().map_or(0, |(_, p)| p.len());
        let mut b = PredictionBatch::new(n);
        for (id, p) in models {
            b.insert(id, p.clone()).unwrap();
        }
        b
    }

    #[test]
    fn selects_highest_mean_model() {
        let b = batch(&[
            ("first", vec![0.30, 0.50]),
            ("second", vec![0.70, 0.74]),
            ("third", vec![0.55, 0.55]),
        ]);
        let ranking = ModelRanking::from_batch(&b).unwrap();
        let best = ranking.most_confident().unwrap();
        assert_eq!(best.model, "second");
        assert_eq!(best.mean_confidence_pct, 72.0);

        let order: Vec<&str> = ranking.entries().iter().map(|e| e.model.as_str()).collect();
        assert_eq!(order, vec!["second", "third", "first"]);
        assert_eq!(ranking.entries()[2].mean_confidence_pct, 40.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let b = batch(&[("only", vec![0.123456])]);
        let ranking = ModelRanking::from_batch(&b).unwrap();
        assert_eq!(ranking.entries()[0].mean_confidence_pct, 12.35);
    }

    #[test]
    fn ties_keep_id_order() {
        let b = batch(&[("b", vec![0.6]), ("a", vec![0.6])]);
        let ranking = ModelRanking::from_batch(&b).unwrap();
        assert_eq!(ranking.most_confident().unwrap().model, "a");
    }

    #[test]
    fn empty_batch_has_no_ranking() {
        assert_eq!(
            ModelRanking::from_batch(&PredictionBatch::new(0)),
            Err(ScoringError::EmptyBatch)
        );
        assert_eq!(
            ModelRanking::from_batch(&PredictionBatch::new(3)),
            Err(ScoringError::EmptyRegistry)
        );
    }

    #[test]
    fn renders_table() {
        let b = batch(&[("logit", vec![0.4]), ("forest", vec![0.8])]);
        let text = ModelRanking::from_batch(&b).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "model   confidence_pct");
        assert_eq!(lines[1], "forest  80.00");
        assert_eq!(lines[2], "logit   40.00");
        assert_eq!(lines[3], "most confident: forest (80.00%)");
    }
}
