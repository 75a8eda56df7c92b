//! Serialized Logistic-Regression Classifier

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::InferenceError;

/// Binary logistic-regression classifier persisted with bincode.
///
/// Class 1 is malignant; the decision function is
/// `sigmoid(weights · features + intercept)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// One weight per scaled input feature
    pub weights: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl LogisticModel {
    /// Deserialize a model from its binary artifact
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InferenceError> {
        let bytes = fs::read(path.as_ref())
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))?;
        bincode::deserialize(&bytes)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))
    }

    /// Serialize the model to its binary artifact
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), InferenceError> {
        let bytes = bincode::serialize(self)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))?;
        fs::write(path.as_ref(), bytes)
            .map_err(|e| InferenceError::ModelLoadError(e.to_string()))
    }

    /// Number of input features the model expects
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn check_shape(&self, features: &[f64]) -> Result<(), InferenceError> {
        if features.len() != self.weights.len() {
            return Err(InferenceError::InvalidInputShape {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        Ok(())
    }

    /// Probability of each class: `[p_benign, p_malignant]`
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], InferenceError> {
        self.check_shape(features)?;
        let z: f64 = self.intercept
            + self
                .weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        let p_malignant = 1.0 / (1.0 + (-z).exp());
        Ok([1.0 - p_malignant, p_malignant])
    }

    /// Predicted class: `0` benign, `1` malignant
    pub fn predict(&self, features: &[f64]) -> Result<u8, InferenceError> {
        let [_, p_malignant] = self.predict_proba(features)?;
        Ok(u8::from(p_malignant >= 0.5))
    }
}
