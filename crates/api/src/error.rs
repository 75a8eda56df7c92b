//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use feature_stats::DatasetError;
use inference_engine::InferenceError;
use input_schema::{ScaleError, ValidationError};

/// Request-boundary error type.
///
/// Everything except validation failures surfaces as a generic failure
/// carrying the original error text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", detail);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
