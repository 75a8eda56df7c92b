//! Request Schema and Input Scaling
//!
//! Derives the prediction request schema from training-data statistics,
//! validates raw feature maps against per-field plausible ranges, and
//! min-max-scales validated inputs against the training ranges.

mod error;
mod scaler;
mod schema;

pub use error::{ScaleError, ValidationError};
pub use scaler::MinMaxScaler;
pub use schema::{FieldSpec, InputSchema};
