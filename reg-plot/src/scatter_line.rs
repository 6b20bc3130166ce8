use common::ArrayLike;

use crate::{paired_values, LineHandle, LineStyle, Result, Surface};

/// Overlay a precomputed line, such as fitted values, onto a surface.
/// This does not fit anything.
///
/// # Arguments:
/// surface: Where to draw, usually the one the observations were scattered onto
/// x: The x coordinates
/// y_line: The y coordinates of the line, as many as there are x coordinates
/// style: How to draw the line, defaults apply if `None`
/// label: Legend entry for the line
/// sort_x: Order the points by x before drawing, so unordered inputs don't zig-zag
///
/// # Returns:
/// The same surface and a handle to the drawn line
pub fn scatter_line<'s, S, X, Y>(
    surface: &'s mut S,
    x: &X,
    y_line: &Y,
    style: Option<LineStyle>,
    label: Option<&str>,
    sort_x: bool,
) -> Result<(&'s mut S, LineHandle)>
where
    S: Surface + ?Sized,
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    let mut points = paired_values(x, y_line)?;
    if sort_x {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    debug!("drawing line through {} points", points.len());

    let handle = surface.add_line(points, style.unwrap_or_default(), label.map(String::from));

    Ok((surface, handle))
}
