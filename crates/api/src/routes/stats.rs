//! Feature Statistics Route

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::{ApiError, AppState};
use feature_stats::{Dataset, DatasetSummary};

/// Per-feature min/max/mean, keyed by underscored feature name.
///
/// Statistics are recomputed from a fresh dataset load on every call.
pub async fn get_feature_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let dataset = Dataset::load(&state.config.dataset_path)?;
    let summary = DatasetSummary::from_dataset(&dataset);

    let mut stats = Map::new();
    for col in summary.columns() {
        let entry = serde_json::to_value(col)
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        stats.insert(col.name.replace(' ', "_"), entry);
    }

    Ok(Json(Value::Object(stats)))
}
