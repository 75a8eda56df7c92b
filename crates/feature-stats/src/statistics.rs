//! Per-Feature Statistics Computation

use serde::Serialize;

use crate::loader::Dataset;

/// Min/max/mean statistics for one feature column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    /// Original column name as it appears in the dataset
    #[serde(skip)]
    pub name: String,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean value
    pub mean: f64,
}

impl ColumnStats {
    /// Compute statistics from a slice of values
    fn compute(name: &str, values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        Self {
            name: name.to_string(),
            min,
            max,
            mean,
        }
    }
}

/// Ordered per-feature statistics for the full dataset, label excluded.
///
/// Iteration order matches the dataset's column order; that order is the
/// canonical field order for schema construction and model input.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    columns: Vec<ColumnStats>,
}

impl DatasetSummary {
    /// Compute statistics for every feature column of the dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let columns = dataset
            .feature_columns()
            .map(|name| {
                let values = dataset
                    .column_values(name)
                    .unwrap_or_default();
                ColumnStats::compute(name, &values)
            })
            .collect();

        Self { columns }
    }

    /// Statistics in canonical (dataset column) order
    pub fn columns(&self) -> &[ColumnStats] {
        &self.columns
    }

    /// Look up a column's statistics by its original name
    pub fn get(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of feature columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the summary holds no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
