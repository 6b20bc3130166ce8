use thiserror::Error;

/// Result type alias for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while drawing onto a surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// An input could not be converted into numbers.
    #[error("x and y must be numeric array-like inputs")]
    NonNumeric,
    /// An input holds no points.
    #[error("x and y must be non-empty")]
    Empty,
    /// The coordinates do not pair up.
    #[error("x and y must be the same length, got {x_len} and {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    /// The drawing backend failed.
    #[error("Drawing error: {0}")]
    Drawing(String),
}

/// Convert a plotters error into a `PlotError`
pub(crate) fn drawing<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}
