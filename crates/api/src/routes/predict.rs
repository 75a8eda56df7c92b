//! Prediction Route

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::{ApiError, AppState};
use feature_stats::{Dataset, DatasetSummary};
use inference_engine::DiagnosisReport;
use input_schema::MinMaxScaler;

/// Validate, scale, and score a feature map.
///
/// The positional model input is built in schema field order; the JSON
/// key order of the request never affects it.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<DiagnosisReport>, ApiError> {
    let resolved = state.schema.resolve(&body)?;

    let engine = state
        .engine
        .as_ref()
        .ok_or_else(|| ApiError::Internal("Model is not loaded".to_string()))?;

    // Training ranges are re-read per request; scaling always reflects
    // the dataset on disk.
    let dataset = Dataset::load(&state.config.dataset_path)?;
    let summary = DatasetSummary::from_dataset(&dataset);
    let scaler = MinMaxScaler::from_summary(&summary);
    let scaled = scaler.scale(&resolved)?;

    let vector: Vec<f64> = scaled.iter().map(|(_, value)| *value).collect();
    let report = engine.predict(&vector)?;

    info!(
        "Prediction served: {} (benign={:.4})",
        report.result, report.benign_probability
    );

    Ok(Json(report))
}
