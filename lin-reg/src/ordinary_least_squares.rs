use nalgebra::{Const, DMatrix, Dyn, MatrixView};

use super::{LinReg, LinRegError, Result};

/// Pivots of the factorised normal equations at or below this fraction of the largest
/// pivot mark the system as singular
pub const DEFAULT_SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Ordinary least squares, solved in closed form through the normal equations
/// (AᵗA)β = AᵗY.
/// The system is scaled to a unit diagonal, then factorised and solved directly
/// instead of inverting AᵗA.
#[derive(Debug, Clone)]
pub struct OrdinaryLeastSquares {
    /// Relative pivot size below which the normal equations count as singular
    pub singularity_tolerance: f64,
}

impl Default for OrdinaryLeastSquares {
    fn default() -> Self {
        Self {
            singularity_tolerance: DEFAULT_SINGULARITY_TOLERANCE,
        }
    }
}

impl OrdinaryLeastSquares {
    /// Checks the pivots on the diagonal of the upper triangular LU factor
    fn is_singular(&self, upper: &DMatrix<f64>) -> bool {
        let pivots = upper.diagonal();
        let largest = pivots.amax();
        if !largest.is_finite() || largest == 0.0 {
            return true;
        }

        pivots
            .iter()
            .any(|p| !p.is_finite() || p.abs() <= self.singularity_tolerance * largest)
    }
}

impl LinReg for OrdinaryLeastSquares {
    fn fit_coefficients<'a>(
        &self,
        design: &'a MatrixView<'a, f64, Dyn, Dyn, Const<1>, Dyn>,
        targets: &'a MatrixView<'a, f64, Dyn, Dyn, Const<1>, Dyn>,
    ) -> Result<DMatrix<f64>> {
        if design.nrows() != targets.nrows() {
            return Err(LinRegError::DimensionMismatch {
                design_rows: design.nrows(),
                target_rows: targets.nrows(),
            });
        }
        debug!(
            "fitting {} observations, {} coefficients, {} targets",
            design.nrows(),
            design.ncols(),
            targets.ncols()
        );

        let gram = design.tr_mul(design);
        let moments = design.tr_mul(targets);

        // Scale to a unit diagonal first, so the pivots do not depend on the units of each column.
        // A zero column leaves a zero on the diagonal and therefore a non-finite scale.
        let scale = gram.diagonal().map(|d| d.sqrt().recip());
        if scale.iter().any(|s| !s.is_finite()) {
            return Err(LinRegError::Singular);
        }
        let scaled_gram =
            DMatrix::from_fn(gram.nrows(), gram.ncols(), |i, j| gram[(i, j)] * scale[i] * scale[j]);
        let scaled_moments =
            DMatrix::from_fn(moments.nrows(), moments.ncols(), |i, j| moments[(i, j)] * scale[i]);

        let lu = scaled_gram.lu();
        if self.is_singular(&lu.u()) {
            return Err(LinRegError::Singular);
        }

        let solution = lu.solve(&scaled_moments).ok_or(LinRegError::Singular)?;

        Ok(DMatrix::from_fn(solution.nrows(), solution.ncols(), |i, j| {
            solution[(i, j)] * scale[i]
        }))
    }
}
