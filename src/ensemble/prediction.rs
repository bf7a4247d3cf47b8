use crate::ensemble::ModelRanking;
use crate::ensemble::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Weighted scores at or above this value are labelled [`Outcome::Graduate`].
///
/// Fixed, inclusive, and not adjusted for the sum of the weights.
pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Outcome {
    Graduate,
    Dropout,
}

impl Outcome {
    #[inline]
    pub fn from_weighted_score(score: f64) -> Outcome {
        if score >= DECISION_THRESHOLD {
            Outcome::Graduate
        } else {
            Outcome::Dropout
        }
    }

    /// `1` for the positive class, `0` otherwise.
    pub fn as_binary(self) -> u8 {
        match self {
            Outcome::Graduate => 1,
            Outcome::Dropout => 0,
        }
    }
}

/// Per-model positive-class probabilities for one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionBatch {
    n_rows: usize,
    probabilities: BTreeMap<String, Vec<f64>>,
}

impl PredictionBatch {
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            probabilities: BTreeMap::new(),
        }
    }

    /// Records a model's probabilities after checking length and range.
    pub fn insert(&mut self, model: &str, probabilities: Vec<f64>) -> Result<(), ScoringError> {
        if probabilities.len() != self.n_rows {
            return Err(ScoringError::ProbabilityCountMismatch {
                model: model.to_string(),
                expected: self.n_rows,
                found: probabilities.len(),
            });
        }
        if let Some((row, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(ScoringError::ProbabilityOutOfRange {
                model: model.to_string(),
                row,
                value,
            });
        }
        self.probabilities.insert(model.to_string(), probabilities);
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_models(&self) -> usize {
        self.probabilities.len()
    }

    pub fn probabilities_for(&self, model: &str) -> Option<&[f64]> {
        self.probabilities.get(model).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.probabilities
            .iter()
            .map(|(id, p)| (id.as_str(), p.as_slice()))
    }

    /// Unweighted mean over models of the probability for `row`, in percent.
    pub fn mean_confidence_pct(&self, row: usize) -> Option<f64> {
        if row >= self.n_rows || self.probabilities.is_empty() {
            return None;
        }
        let sum: f64 = self.probabilities.values().map(|p| p[row]).sum();
        Some(sum / self.probabilities.len() as f64 * 100.0)
    }
}

/// Decision and display figures for one input row.
///
/// `weighted_score` drives `outcome`; `mean_confidence_pct` is the unweighted
/// model average shown to users. The two only coincide when all weights are
/// equal to `1 / n_models`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowPrediction {
    pub outcome: Outcome,
    pub weighted_score: f64,
    pub mean_confidence_pct: f64,
}

/// Output of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleResult {
    probabilities: PredictionBatch,
    rows: Vec<RowPrediction>,
}

impl EnsembleResult {
    pub(crate) fn new(probabilities: PredictionBatch, rows: Vec<RowPrediction>) -> Self {
        Self {
            probabilities,
            rows,
        }
    }

    pub fn probabilities(&self) -> &PredictionBatch {
        &self.probabilities
    }

    pub fn rows(&self) -> &[RowPrediction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.rows.iter().map(|r| r.outcome).collect()
    }

    pub fn weighted_scores(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.weighted_score).collect()
    }

    pub fn mean_confidence_pct(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mean_confidence_pct).collect()
    }

    /// Per-model batch-mean confidence ranking.
    pub fn ranking(&self) -> Result<ModelRanking, ScoringError> {
        ModelRanking::from_batch(&self.probabilities)
    }
}
