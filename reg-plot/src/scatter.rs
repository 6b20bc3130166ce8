use common::ArrayLike;

use crate::{paired_values, PointsHandle, Result, ScatterStyle, Surface};

/// Draw observations as points onto a surface.
/// Both inputs are flattened, so column vectors and nested rows work too.
///
/// # Arguments:
/// surface: Where to draw, usually a `Figure`
/// x: The x coordinates
/// y: The y coordinates, as many as there are x coordinates
/// style: How to draw the points, defaults apply if `None`
/// label: Legend entry for the points
///
/// # Returns:
/// The same surface and a handle to the drawn points
pub fn scatter<'s, S, X, Y>(
    surface: &'s mut S,
    x: &X,
    y: &Y,
    style: Option<ScatterStyle>,
    label: Option<&str>,
) -> Result<(&'s mut S, PointsHandle)>
where
    S: Surface + ?Sized,
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    let points = paired_values(x, y)?;
    debug!("scattering {} points", points.len());

    let handle = surface.add_points(points, style.unwrap_or_default(), label.map(String::from));

    Ok((surface, handle))
}
