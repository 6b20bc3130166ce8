//! Thin plotting helpers to draw observations and overlay fitted lines.
//! Nothing in here fits or scores a model.

#[macro_use]
extern crate log;

use common::ArrayLike;

mod error;
mod figure;
mod scatter;
mod scatter_line;
mod style;

pub use error::{PlotError, Result};
pub use figure::{Figure, Layer, LineHandle, LineLayer, PointsHandle, PointsLayer, Surface};
pub use scatter::scatter;
pub use scatter_line::scatter_line;
pub use style::{LineStyle, ScatterStyle};

pub type Series = Vec<(f64, f64)>;

/// Flatten both inputs and pair them up point by point
pub(crate) fn paired_values<X, Y>(x: &X, y: &Y) -> Result<Series>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    if x.shape().is_none() || y.shape().is_none() {
        return Err(PlotError::NonNumeric);
    }
    let x = x.values();
    let y = y.values();

    if x.is_empty() || y.is_empty() {
        return Err(PlotError::Empty);
    }
    if x.len() != y.len() {
        return Err(PlotError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    Ok(x.into_iter().zip(y).collect())
}
