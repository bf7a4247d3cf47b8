use crate::core::features::{FeatureSchema, FeatureVector};
use crate::input::InputError;
use crate::utils::file_parsing::split_csv_line;
use std::fs;
use std::path::Path;

/// An uploaded table: a header line and string cells, as read from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularBatch {
    columns: Vec<String>,
    records: Vec<TabularRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabularRecord {
    /// 1-based line number in the source text.
    pub line: usize,
    pub cells: Vec<String>,
}

impl TabularBatch {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_csv(&text)
    }

    /// Parses comma-separated text. Blank lines are skipped; every other line
    /// must have as many cells as the header.
    pub fn parse_csv(text: &str) -> Result<Self, InputError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
            .filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines.next().ok_or(InputError::MissingHeader)?;
        let columns = split_csv_line(header);

        let mut records = Vec::new();
        for (line, raw) in lines {
            let cells = split_csv_line(raw);
            if cells.len() != columns.len() {
                return Err(InputError::RaggedRow {
                    line,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
            records.push(TabularRecord { line, cells });
        }

        Ok(Self { columns, records })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[TabularRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn index_of_column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Selects the schema's columns by name, in schema order, and parses them
    /// as finite numbers. Columns not in the schema are ignored.
    pub fn to_feature_vectors(&self, schema: &FeatureSchema) -> Result<Vec<FeatureVector>, InputError> {
        let indices = schema
            .names()
            .iter()
            .map(|name| {
                self.index_of_column(name)
                    .ok_or_else(|| InputError::MissingColumn(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.records
            .iter()
            .map(|record| {
                let values = indices
                    .iter()
                    .map(|&i| {
                        let cell = record.cells[i].trim();
                        cell.parse::<f64>()
                            .ok()
                            .filter(|v| v.is_finite())
                            .ok_or_else(|| InputError::InvalidNumber {
                                line: record.line,
                                column: self.columns[i].clone(),
                                value: cell.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, InputError>(FeatureVector::with_schema(schema, values))
            })
            .collect()
    }
}
