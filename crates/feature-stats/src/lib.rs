//! Feature Statistics Provider
//!
//! Loads the breast-cancer training dataset and computes per-feature
//! min/max/mean statistics used for schema derivation and input scaling.

mod loader;
mod statistics;

pub use loader::{Dataset, LABEL_COLUMN};
pub use statistics::{ColumnStats, DatasetSummary};

use thiserror::Error;

/// Errors while loading or summarizing the training dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to load dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("Invalid numeric value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Invalid diagnosis label '{label}' at row {row}")]
    InvalidLabel { label: String, row: usize },
    #[error("Dataset contains no rows")]
    Empty,
}
