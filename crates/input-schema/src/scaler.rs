//! Min-Max Input Scaling

use std::collections::HashMap;

use feature_stats::DatasetSummary;
use tracing::debug;

use crate::error::ScaleError;

/// Scales request values into the model's training range.
///
/// Holds per-column `(min, max)` from the training data plus the mapping
/// from underscored field names back to original column names.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    ranges: HashMap<String, (f64, f64)>,
    key_map: HashMap<String, String>,
}

impl MinMaxScaler {
    /// Build a scaler from per-feature training statistics
    pub fn from_summary(summary: &DatasetSummary) -> Self {
        let mut ranges = HashMap::new();
        let mut key_map = HashMap::new();
        for col in summary.columns() {
            ranges.insert(col.name.clone(), (col.min, col.max));
            key_map.insert(col.name.replace(' ', "_"), col.name.clone());
        }
        Self { ranges, key_map }
    }

    /// Scale one value against its column's training range.
    ///
    /// Degenerate columns (`max == min`) scale to `0.0` instead of
    /// dividing by zero. Results are not clamped to `[0, 1]`; inputs
    /// beyond the training extremes scale outside that interval.
    pub fn scale_value(&self, name: &str, value: f64) -> Result<(String, f64), ScaleError> {
        let original = self
            .key_map
            .get(name)
            .map(String::as_str)
            .unwrap_or(name);

        let &(min, max) = self
            .ranges
            .get(original)
            .ok_or_else(|| ScaleError::UnknownFeature(name.to_string()))?;

        let range = max - min;
        let scaled = if range != 0.0 {
            (value - min) / range
        } else {
            0.0
        };

        Ok((original.to_string(), scaled))
    }

    /// Scale a resolved input, preserving its order and cardinality.
    ///
    /// Output entries are keyed by the original column name; every input
    /// feature appears exactly once, value-for-value transformed.
    pub fn scale(&self, input: &[(String, f64)]) -> Result<Vec<(String, f64)>, ScaleError> {
        let scaled = input
            .iter()
            .map(|(name, value)| self.scale_value(name, *value))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Scaled {} features", scaled.len());
        Ok(scaled)
    }
}
