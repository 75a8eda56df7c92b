//! Request Schema Derivation and Validation

use feature_stats::DatasetSummary;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;

/// Descriptor for one request field, derived from a feature column
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Field name: the column name with spaces replaced by underscores
    pub name: String,
    /// Original spaced column name, accepted as an input alias
    pub alias: Option<String>,
    /// Default value when the field is omitted: the training mean
    pub default: f64,
    /// Exclusive lower bound: training min - 1
    pub lower: f64,
    /// Exclusive upper bound: training max + 1
    pub upper: f64,
}

impl FieldSpec {
    /// Check a value against the field's exclusive bounds
    fn check(&self, value: f64) -> Result<(), ValidationError> {
        if value > self.lower && value < self.upper {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                field: self.name.clone(),
                value,
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}

/// Prediction request schema, one field per feature column.
///
/// Built once at startup. Field order matches the dataset's column order
/// and is the single canonical ordering used for validation output and
/// model input vectors.
#[derive(Debug, Clone)]
pub struct InputSchema {
    fields: Vec<FieldSpec>,
}

impl InputSchema {
    /// Derive the schema from per-feature training statistics
    pub fn from_summary(summary: &DatasetSummary) -> Self {
        let fields = summary
            .columns()
            .iter()
            .map(|col| {
                let name = col.name.replace(' ', "_");
                let alias = if col.name.contains(' ') {
                    Some(col.name.clone())
                } else {
                    None
                };
                FieldSpec {
                    name,
                    alias,
                    default: col.mean,
                    lower: col.min - 1.0,
                    upper: col.max + 1.0,
                }
            })
            .collect();

        Self { fields }
    }

    /// Fields in canonical order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate a raw request body and resolve it to canonical order.
    ///
    /// Each field is taken by name, then by alias, then defaulted to the
    /// training mean. Values must be JSON numbers strictly inside the
    /// field's bounds. Unknown keys are ignored. The output always covers
    /// every field, in schema order, regardless of the JSON key order.
    pub fn resolve(&self, body: &Value) -> Result<Vec<(String, f64)>, ValidationError> {
        let object: &Map<String, Value> = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let mut resolved = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let raw = object.get(&field.name).or_else(|| {
                field
                    .alias
                    .as_deref()
                    .and_then(|alias| object.get(alias))
            });

            let value = match raw {
                Some(value) => value.as_f64().ok_or_else(|| ValidationError::NotANumber {
                    field: field.name.clone(),
                })?,
                None => field.default,
            };

            field.check(value)?;
            resolved.push((field.name.clone(), value));
        }

        debug!("Resolved {} request fields", resolved.len());
        Ok(resolved)
    }
}
