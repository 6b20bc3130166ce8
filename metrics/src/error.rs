//! Error types for scoring predictions.

use common::Shape;
use thiserror::Error;

/// Result type alias for scoring operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur while scoring predictions against observations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// An input could not be viewed as a sequence of numbers.
    #[error("Invalid argument type: {0}")]
    InvalidArgumentType(InvalidType),
    /// An input holds no elements.
    #[error("Input arrays cannot be empty")]
    EmptyInput,
    /// The observations and the predictions differ in shape.
    #[error("Shape mismatch: y_true {y_true} vs y_pred {y_pred}")]
    ShapeMismatch {
        /// Shape of the observations
        y_true: Shape,
        /// Shape of the predictions
        y_pred: Shape,
    },
}

/// Why an input was rejected as an argument type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidType {
    /// The input cannot be viewed as a numeric array at all.
    #[error("y_true and y_pred must be array-like")]
    NotArrayLike,
    /// The input is a zero-dimensional value.
    #[error("input cannot be a single scalar value; must be a sequence")]
    Scalar,
}
