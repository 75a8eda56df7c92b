//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds to
    pub bind_addr: String,

    /// Path to the training dataset CSV
    pub dataset_path: String,

    /// Path to the serialized classifier artifact
    pub model_path: String,

    /// Origins allowed by the CORS policy
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),

            dataset_path: env::var("DATASET_PATH")
                .unwrap_or_else(|_| "data/data.csv".to_string()),

            model_path: env::var("MODEL_PATH").unwrap_or_else(|_| "model/model.bin".to_string()),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }
}
