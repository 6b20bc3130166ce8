use plotters::prelude::{RGBColor, BLUE, RED};

/// Styling of scattered points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterStyle {
    /// Fill color of each point
    pub color: RGBColor,
    /// Radius of each point in pixels
    pub size: i32,
    /// Opacity in [0, 1]
    pub alpha: f64,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            color: BLUE,
            size: 3,
            alpha: 1.0,
        }
    }
}

/// Styling of an overlaid line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color
    pub color: RGBColor,
    /// Stroke width in pixels
    pub width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: RED,
            width: 2,
        }
    }
}
