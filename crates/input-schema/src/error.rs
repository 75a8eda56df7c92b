//! Validation and Scaling Error Types

use thiserror::Error;

/// Errors while validating a prediction request against the schema
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Value outside the field's exclusive plausible range
    #[error("{field} value {value} must be greater than {lower} and less than {upper}")]
    OutOfRange {
        field: String,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// Value is not a JSON number
    #[error("{field} must be a number")]
    NotANumber { field: String },

    /// Request body is not a JSON object
    #[error("Request body must be a JSON object of feature values")]
    NotAnObject,
}

/// Errors while scaling a validated input
#[derive(Debug, Clone, Error)]
pub enum ScaleError {
    /// Feature name has no statistics in the training data
    #[error("Unknown feature '{0}'")]
    UnknownFeature(String),
}
