//! Inference Engine Implementation

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::model::LogisticModel;
use crate::InferenceError;

/// Version of the shipped model artifact, reported by the health endpoint
pub const MODEL_VERSION: &str = "1.0.0";

/// Diagnosis produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    /// Class 0: benign tumor
    Benign,
    /// Class 1: malignant tumor
    Malignant,
}

impl Diagnosis {
    /// Response label expected by the web client
    pub fn as_str(&self) -> &'static str {
        match self {
            Diagnosis::Benign => "Benign",
            Diagnosis::Malignant => "Malicious",
        }
    }

    fn from_class(class: u8) -> Self {
        if class == 0 {
            Diagnosis::Benign
        } else {
            Diagnosis::Malignant
        }
    }
}

/// Prediction response body
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    /// Diagnosis label
    pub result: String,
    /// Probability of class 0 (benign)
    pub benign_probability: f64,
    /// Probability of class 1 (malignant)
    pub malignant_probability: f64,
}

/// Classifier loaded once at startup and shared read-only across requests
pub struct InferenceEngine {
    model: LogisticModel,
    model_path: String,
}

impl InferenceEngine {
    /// Load the serialized classifier from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InferenceError> {
        let model_path = path.as_ref().display().to_string();
        let model = LogisticModel::load(path.as_ref())?;
        info!(
            "Loaded classifier from {} ({} features)",
            model_path,
            model.n_features()
        );
        Ok(Self { model, model_path })
    }

    /// Wrap an in-memory model (used by tests)
    pub fn from_model(model: LogisticModel) -> Self {
        Self {
            model,
            model_path: String::new(),
        }
    }

    /// Run the classifier once on a scaled feature vector.
    ///
    /// The vector must be ordered consistently with the request schema's
    /// field order; the model has no feature names of its own.
    pub fn predict(&self, features: &[f64]) -> Result<DiagnosisReport, InferenceError> {
        let class = self.model.predict(features)?;
        let [benign_probability, malignant_probability] = self.model.predict_proba(features)?;
        let diagnosis = Diagnosis::from_class(class);

        debug!(
            "Prediction: {} (benign={:.4}, malignant={:.4})",
            diagnosis.as_str(),
            benign_probability,
            malignant_probability
        );

        Ok(DiagnosisReport {
            result: diagnosis.as_str().to_string(),
            benign_probability,
            malignant_probability,
        })
    }

    /// Number of features the model expects
    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    /// Path the model was loaded from
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}
