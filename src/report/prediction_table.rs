use crate::core::features::FeatureVector;
use crate::ensemble::{EnsembleResult, RowPrediction};
use crate::report::ReportError;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
}

const STATE_COLUMN: &str = "predicted_state";
const CONFIDENCE_COLUMN: &str = "confidence_pct";
const SCORE_COLUMN: &str = "weighted_score";

/// Scored rows ready for export: one line per input row with the predicted
/// state, the display confidence, the weighted score and the raw features.
pub struct PredictionTable<'a> {
    rows: &'a [FeatureVector],
    result: &'a EnsembleResult,
}

impl<'a> PredictionTable<'a> {
    pub fn new(rows: &'a [FeatureVector], result: &'a EnsembleResult) -> Result<Self, ReportError> {
        if rows.len() != result.len() {
            return Err(ReportError::LengthMismatch {
                rows: rows.len(),
                predictions: result.len(),
            });
        }
        Ok(Self { rows, result })
    }

    fn lines(&self) -> impl Iterator<Item = (&'a FeatureVector, &'a RowPrediction)> {
        self.rows.iter().zip(self.result.rows())
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), ReportError> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write(&mut w, fmt)?;
        w.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, w: &mut W, fmt: ReportFormat) -> Result<(), ReportError> {
        match fmt {
            ReportFormat::Csv => self.write_with_delimiter(w, ','),
            ReportFormat::Tsv => self.write_with_delimiter(w, '\t'),
            ReportFormat::Json => self.write_json(w),
        }
    }

    fn write_with_delimiter<W: Write>(&self, w: &mut W, d: char) -> Result<(), ReportError> {
        let feature_names = self.rows.first().map(|r| r.names()).unwrap_or_default();
        write!(w, "{STATE_COLUMN}{d}{CONFIDENCE_COLUMN}{d}{SCORE_COLUMN}")?;
        for name in feature_names {
            write!(w, "{d}{}", quote_if_needed(name, d))?;
        }
        writeln!(w)?;

        for (row, prediction) in self.lines() {
            write!(
                w,
                "{}{d}{:.2}{d}{:.6}",
                prediction.outcome, prediction.mean_confidence_pct, prediction.weighted_score
            )?;
            for v in row.values() {
                write!(w, "{d}{v}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W) -> Result<(), ReportError> {
        let records: Vec<Value> = self
            .lines()
            .map(|(row, prediction)| {
                let mut obj = Map::new();
                obj.insert(STATE_COLUMN.into(), Value::from(prediction.outcome.to_string()));
                obj.insert(
                    CONFIDENCE_COLUMN.into(),
                    Value::from(prediction.mean_confidence_pct),
                );
                obj.insert(SCORE_COLUMN.into(), Value::from(prediction.weighted_score));
                for (name, v) in row.names().iter().zip(row.values()) {
                    obj.insert(name.clone(), Value::from(*v));
                }
                Value::Object(obj)
            })
            .collect();
        serde_json::to_writer_pretty(&mut *w, &records)?;
        writeln!(w)?;
        Ok(())
    }
}

fn quote_if_needed(name: &str, delimiter: char) -> String {
    if name.contains(delimiter) || name.contains('"') {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}
