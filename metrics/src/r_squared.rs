use common::ArrayLike;

use crate::{InvalidType, Result, ScoreError};

/// Calculate the coefficient of determination (R²) of predictions against observations.
///
/// R² = 1 - SS_res / SS_tot, where
/// SS_res = Σ(y_true - y_pred)² and SS_tot = Σ(y_true - ȳ)².
///
/// A score of 1.0 is a perfect prediction, 0.0 is no better than predicting the mean
/// and negative scores are worse than the mean.
/// When all observations are identical, SS_tot is 0 and the score is exactly 1.0 if
/// the predictions match them exactly and 0.0 otherwise, so the score is always finite.
///
/// # Arguments:
/// y_true: The observed values
/// y_pred: The predicted values, of the same shape as `y_true`
///
/// # Errors:
/// Inputs are checked in this order:
/// - `InvalidArgumentType` if an input is not array-like or is a single scalar
/// - `EmptyInput` if an input has no elements
/// - `ShapeMismatch` if the shapes differ
pub fn r_squared<T, P>(y_true: &T, y_pred: &P) -> Result<f64>
where
    T: ArrayLike + ?Sized,
    P: ArrayLike + ?Sized,
{
    let (true_shape, pred_shape) = match (y_true.shape(), y_pred.shape()) {
        (Some(t), Some(p)) => (t, p),
        _ => return Err(ScoreError::InvalidArgumentType(InvalidType::NotArrayLike)),
    };
    if true_shape.ndim() == 0 || pred_shape.ndim() == 0 {
        return Err(ScoreError::InvalidArgumentType(InvalidType::Scalar));
    }
    if true_shape.size() == 0 || pred_shape.size() == 0 {
        return Err(ScoreError::EmptyInput);
    }
    if true_shape != pred_shape {
        return Err(ScoreError::ShapeMismatch {
            y_true: true_shape,
            y_pred: pred_shape,
        });
    }

    let y_true = y_true.values();
    let y_pred = y_pred.values();

    let ss_res: f64 = y_true.iter().zip(&y_pred).map(|(t, p)| (t - p).powi(2)).sum();
    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();
    debug!("n: {}, ss_res: {}, ss_tot: {}", y_true.len(), ss_res, ss_tot);

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use common::Shape;
    use nalgebra::{DMatrix, DVector};

    use super::*;

    #[test]
    fn r_squared_of_predictions() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let r2 = r_squared(&[3.0, -0.5, 2.0, 7.0], &[2.5, 0.0, 2.0, 8.0]).unwrap();
        info!("r2: {}", r2);

        assert!((r2 - 0.9486081370449679).abs() < 1e-12);
    }

    #[test]
    fn perfect_prediction() {
        let y = vec![1.0, 2.0, 3.0];
        assert_eq!(r_squared(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn predicting_the_mean_scores_zero() {
        let r2 = r_squared(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(r2, 0.0);
    }

    #[test]
    fn worse_than_the_mean_is_negative() {
        let r2 = r_squared(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_eq!(r2, -3.0);
    }

    #[test]
    fn constant_target_perfect() {
        assert_eq!(r_squared(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]).unwrap(), 1.0);
        assert_eq!(r_squared(&[0.0; 5], &[0.0; 5]).unwrap(), 1.0);
    }

    #[test]
    fn constant_target_wrong() {
        assert_eq!(r_squared(&[5.0, 5.0, 5.0], &[4.0, 4.0, 4.0]).unwrap(), 0.0);
    }

    #[test]
    fn single_sample_is_finite() {
        let r2 = r_squared(&[10.0], &[11.0]).unwrap();
        assert!(r2.is_finite());
        assert_eq!(r2, 0.0);
    }

    #[test]
    fn very_large_values() {
        let r2 = r_squared(&[1e10, 2e10, 3e10], &[1.1e10, 1.9e10, 3.2e10]).unwrap();
        assert!(0.0 < r2 && r2 < 1.0);
    }

    #[test]
    fn matrices_are_scored_as_a_whole() {
        let y_true: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let y_pred: DMatrix<f64> = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 5.0]);

        // mean 2.5, ss_tot 5, ss_res 1
        let r2 = r_squared(&y_true, &y_pred).unwrap();
        assert!((r2 - 0.8).abs() < 1e-12);

        let nested = vec![vec![1.0, 2.0], vec![3.0, 5.0]];
        assert_eq!(r_squared(&y_true, &nested).unwrap(), r2);
    }

    #[test]
    fn not_array_like() {
        assert_eq!(
            r_squared("3, 4", &[3.0, 4.0]),
            Err(ScoreError::InvalidArgumentType(InvalidType::NotArrayLike))
        );

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            r_squared(&[1.0, 2.0, 3.0], &ragged),
            Err(ScoreError::InvalidArgumentType(InvalidType::NotArrayLike))
        );
    }

    #[test]
    fn scalar_input() {
        let err = r_squared(&10.0, &[10.0]).unwrap_err();
        assert_eq!(err, ScoreError::InvalidArgumentType(InvalidType::Scalar));
        assert!(err.to_string().contains("must be a sequence"));
    }

    #[test]
    fn type_is_checked_before_emptiness() {
        let empty: Vec<f64> = vec![];
        assert_eq!(
            r_squared(&empty, &10.0),
            Err(ScoreError::InvalidArgumentType(InvalidType::Scalar))
        );
    }

    #[test]
    fn empty_input() {
        let empty: Vec<f64> = vec![];
        let err = r_squared(&empty, &empty).unwrap_err();
        assert_eq!(err, ScoreError::EmptyInput);
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn emptiness_is_checked_before_shape() {
        let empty: Vec<f64> = vec![];
        assert_eq!(r_squared(&empty, &[1.0, 2.0]), Err(ScoreError::EmptyInput));
    }

    #[test]
    fn shape_mismatch() {
        let err = r_squared(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::ShapeMismatch {
                y_true: Shape::new(vec![3]),
                y_pred: Shape::new(vec![2]),
            }
        );
        assert_eq!(err.to_string(), "Shape mismatch: y_true (3,) vs y_pred (2,)");
    }

    #[test]
    fn column_vector_differs_from_column_matrix() {
        let vector: DVector<f64> = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let matrix: DMatrix<f64> = DMatrix::from_column_slice(3, 1, &[1.0, 2.0, 3.0]);

        assert_eq!(
            r_squared(&vector, &matrix),
            Err(ScoreError::ShapeMismatch {
                y_true: Shape::new(vec![3]),
                y_pred: Shape::new(vec![3, 1]),
            })
        );
    }

    #[test]
    fn repeated_scores_are_identical() {
        let y_true = [0.3, 1.7, 2.2, 4.9, 5.1];
        let y_pred = [0.5, 1.5, 2.5, 4.5, 5.5];

        let first = r_squared(&y_true, &y_pred).unwrap();
        let second = r_squared(&y_true, &y_pred).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
    }
}
