//! Error types for fitting linear models.

use thiserror::Error;

/// Result type alias for linear regression operations.
pub type Result<T> = std::result::Result<T, LinRegError>;

/// Errors that can occur while fitting or applying a linear model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinRegError {
    /// The design and the targets do not describe the same observations.
    #[error("Dimension mismatch: design has {design_rows} rows but targets have {target_rows}")]
    DimensionMismatch {
        design_rows: usize,
        target_rows: usize,
    },
    /// The coefficients do not fit the design they are applied to.
    #[error(
        "Dimension mismatch: design has {design_cols} columns but coefficients have {coefficient_rows} rows"
    )]
    CoefficientMismatch {
        design_cols: usize,
        coefficient_rows: usize,
    },
    /// The normal equations have no unique solution.
    #[error("Singular matrix: the design has linearly dependent columns or too few rows")]
    Singular,
}
