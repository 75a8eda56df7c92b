//! Dataset Loading and Cleaning

use std::path::Path;

use tracing::debug;

use crate::DatasetError;

/// Name of the diagnosis label column
pub const LABEL_COLUMN: &str = "diagnosis";

/// Non-feature columns dropped on load: the row identifier and the
/// trailing all-null placeholder the source CSV carries.
const DROPPED_COLUMNS: [&str; 2] = ["id", "Unnamed: 32"];

/// Cleaned training dataset.
///
/// Columns are kept in file order with the identifier and placeholder
/// columns removed and the diagnosis label mapped to `{M: 1.0, B: 0.0}`.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Load and clean the dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // The source table must carry the columns we drop and the label;
        // anything else is a different file than the one the model was
        // trained on.
        for required in DROPPED_COLUMNS.into_iter().chain([LABEL_COLUMN]) {
            if !headers.iter().any(|h| h == required) {
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }

        let kept: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !DROPPED_COLUMNS.contains(&name.as_str()))
            .map(|(idx, _)| idx)
            .collect();

        let columns: Vec<String> = kept.iter().map(|&idx| headers[idx].clone()).collect();

        let mut rows = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let mut row = Vec::with_capacity(kept.len());
            for &col_idx in &kept {
                let raw = record.get(col_idx).unwrap_or("").trim();
                let name = &headers[col_idx];
                let value = if name == LABEL_COLUMN {
                    match raw {
                        "M" => 1.0,
                        "B" => 0.0,
                        other => {
                            return Err(DatasetError::InvalidLabel {
                                label: other.to_string(),
                                row: row_idx,
                            })
                        }
                    }
                } else {
                    raw.parse::<f64>()
                        .map_err(|_| DatasetError::InvalidValue {
                            column: name.clone(),
                            row: row_idx,
                            value: raw.to_string(),
                        })?
                };
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        debug!("Loaded dataset: {} rows, {} columns", rows.len(), columns.len());

        Ok(Self { columns, rows })
    }

    /// Column names in file order (label included, dropped columns removed)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Feature column names in file order (label excluded)
    pub fn feature_columns(&self) -> impl Iterator<Item = &String> {
        self.columns.iter().filter(|c| c.as_str() != LABEL_COLUMN)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of a column by name, in row order
    pub fn column_values(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = "\
id,diagnosis,radius_mean,texture_mean,Unnamed: 32
1001,M,17.99,10.38,
1002,B,13.54,14.36,
1003,B,12.45,15.70,
";

    #[test]
    fn test_drops_non_feature_columns() {
        let file = write_csv(SAMPLE);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(
            dataset.columns(),
            &["diagnosis", "radius_mean", "texture_mean"]
        );
    }

    #[test]
    fn test_label_mapping() {
        let file = write_csv(SAMPLE);
        let dataset = Dataset::load(file.path()).unwrap();
        let labels = dataset.column_values("diagnosis").unwrap();
        assert_eq!(labels, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_feature_columns_exclude_label() {
        let file = write_csv(SAMPLE);
        let dataset = Dataset::load(file.path()).unwrap();
        let features: Vec<&String> = dataset.feature_columns().collect();
        assert_eq!(features, ["radius_mean", "texture_mean"]);
    }

    #[test]
    fn test_missing_file() {
        let result = Dataset::load("/nonexistent/data.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_column() {
        let file = write_csv("diagnosis,radius_mean\nM,17.99\n");
        let result = Dataset::load(file.path());
        assert!(matches!(result, Err(DatasetError::MissingColumn(_))));
    }

    #[test]
    fn test_invalid_label() {
        let file = write_csv(
            "id,diagnosis,radius_mean,Unnamed: 32\n1001,X,17.99,\n",
        );
        let result = Dataset::load(file.path());
        assert!(matches!(result, Err(DatasetError::InvalidLabel { .. })));
    }

    #[test]
    fn test_invalid_numeric_value() {
        let file = write_csv(
            "id,diagnosis,radius_mean,Unnamed: 32\n1001,M,not-a-number,\n",
        );
        let result = Dataset::load(file.path());
        assert!(matches!(result, Err(DatasetError::InvalidValue { .. })));
    }

    #[test]
    fn test_empty_dataset() {
        let file = write_csv("id,diagnosis,radius_mean,Unnamed: 32\n");
        let result = Dataset::load(file.path());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_deterministic_reload() {
        let file = write_csv(SAMPLE);
        let first = Dataset::load(file.path()).unwrap();
        let second = Dataset::load(file.path()).unwrap();
        assert_eq!(first.columns(), second.columns());
        assert_eq!(
            first.column_values("radius_mean"),
            second.column_values("radius_mean")
        );
    }
}
