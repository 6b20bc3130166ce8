#[macro_use]
extern crate log;

use nalgebra::{Const, DMatrix, DVector, Dyn, MatrixView};

mod error;
mod ordinary_least_squares;

pub use error::{LinRegError, Result};
pub use ordinary_least_squares::{OrdinaryLeastSquares, DEFAULT_SINGULARITY_TOLERANCE};

/// Generic way of performing linear regression and fitting the coefficient matrix
pub trait LinReg: Clone {
    /// Fit a coefficient matrix, mapping the design to the targets
    ///
    /// # Parameters
    /// design: Input data having N rows, where the first column should be just 1s
    /// targets: Target data having N rows and one column per target
    ///
    /// # Returns
    /// The coefficients with one row per design column and one column per target.
    /// Row 0 holds the intercepts.
    fn fit_coefficients<'a>(
        &self,
        design: &'a MatrixView<'a, f64, Dyn, Dyn, Const<1>, Dyn>,
        targets: &'a MatrixView<'a, f64, Dyn, Dyn, Const<1>, Dyn>,
    ) -> Result<DMatrix<f64>>;

    /// Fit the features against the targets and return the fitted values.
    /// The predictions have the same shape as the targets.
    ///
    /// # Parameters
    /// features: The raw observations, one row each, without the bias column
    /// targets: Either a single target vector or a matrix of targets
    fn fit_predict<T: Targets>(&self, features: &DMatrix<f64>, targets: &T) -> Result<T> {
        let targets = targets.to_target_matrix();
        if features.nrows() != targets.nrows() {
            return Err(LinRegError::DimensionMismatch {
                design_rows: features.nrows(),
                target_rows: targets.nrows(),
            });
        }

        let design = augment(features);
        let coefficients = self.fit_coefficients(
            &design.columns(0, design.ncols()),
            &targets.columns(0, targets.ncols()),
        )?;
        let predictions = predict(&design, &coefficients)?;

        Ok(T::from_target_matrix(predictions))
    }
}

/// The shapes a regression target may take
pub trait Targets: Sized {
    /// View the targets as a matrix with one column per target
    fn to_target_matrix(&self) -> DMatrix<f64>;

    /// Convert a matrix with one column per target back into `Self`
    fn from_target_matrix(columns: DMatrix<f64>) -> Self;
}

impl Targets for DVector<f64> {
    fn to_target_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_column_slice(self.nrows(), 1, self.as_slice())
    }

    /// `columns` must have exactly one column
    fn from_target_matrix(columns: DMatrix<f64>) -> Self {
        debug_assert_eq!(columns.ncols(), 1, "a target vector is a single column");
        DVector::from_row_slice(columns.as_slice())
    }
}

impl Targets for DMatrix<f64> {
    #[inline(always)]
    fn to_target_matrix(&self) -> DMatrix<f64> {
        self.clone()
    }

    #[inline(always)]
    fn from_target_matrix(columns: DMatrix<f64>) -> Self {
        columns
    }
}

/// Prepend the column of 1s used for the intercept
pub fn augment(features: &DMatrix<f64>) -> DMatrix<f64> {
    features.clone().insert_column(0, 1.0)
}

/// Apply fitted coefficients to an augmented design
pub fn predict(design: &DMatrix<f64>, coefficients: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if design.ncols() != coefficients.nrows() {
        return Err(LinRegError::CoefficientMismatch {
            design_cols: design.ncols(),
            coefficient_rows: coefficients.nrows(),
        });
    }

    Ok(design * coefficients)
}

/// Fit an ordinary least squares model with default settings and return the fitted values
pub fn fit_predict<T: Targets>(features: &DMatrix<f64>, targets: &T) -> Result<T> {
    OrdinaryLeastSquares::default().fit_predict(features, targets)
}
