//! Diagnosis Inference Engine
//!
//! Loads the pre-serialized breast-cancer classifier and maps its output
//! to diagnosis labels and class probabilities.

mod engine;
mod model;

pub use engine::{Diagnosis, DiagnosisReport, InferenceEngine, MODEL_VERSION};
pub use model::LogisticModel;

use thiserror::Error;

/// Errors during model loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Invalid input shape: expected {expected} features, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}
