use std::{ops::Range, path::Path};

use plotters::{coord::Shift, prelude::*};

use crate::{
    error::drawing,
    style::{LineStyle, ScatterStyle},
    Result, Series,
};

/// A drawable surface that collects points and lines
pub trait Surface {
    /// Draw the given points
    fn add_points(
        &mut self,
        points: Series,
        style: ScatterStyle,
        label: Option<String>,
    ) -> PointsHandle;

    /// Draw a line through the given points, in the given order
    fn add_line(&mut self, points: Series, style: LineStyle, label: Option<String>) -> LineHandle;
}

/// Refers to points drawn onto a `Figure`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsHandle(usize);

/// Refers to a line drawn onto a `Figure`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHandle(usize);

/// Points as drawn by `scatter`
#[derive(Debug, Clone, PartialEq)]
pub struct PointsLayer {
    /// The (x, y) pairs, in input order
    pub points: Series,
    /// Marker appearance
    pub style: ScatterStyle,
    /// Legend entry, if any
    pub label: Option<String>,
}

/// A polyline as drawn by `scatter_line`
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayer {
    /// The vertices, in drawing order
    pub points: Series,
    /// Stroke appearance
    pub style: LineStyle,
    /// Legend entry, if any
    pub label: Option<String>,
}

/// Everything drawn onto a `Figure`, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Unconnected markers
    Points(PointsLayer),
    /// Connected vertices
    Line(LineLayer),
}

impl Layer {
    #[inline(always)]
    pub fn points(&self) -> &Series {
        match self {
            Layer::Points(l) => &l.points,
            Layer::Line(l) => &l.points,
        }
    }

    #[inline(always)]
    pub fn label(&self) -> Option<&str> {
        match self {
            Layer::Points(l) => l.label.as_deref(),
            Layer::Line(l) => l.label.as_deref(),
        }
    }
}

/// A single chart which is rendered with plotters once everything is drawn
#[derive(Debug, Clone)]
pub struct Figure {
    caption: Option<String>,
    dims: (u32, u32),
    layers: Vec<Layer>,
}

impl Figure {
    /// Create an empty figure of the given pixel dimensions
    pub fn new(dims: (u32, u32)) -> Self {
        Self {
            caption: None,
            dims,
            layers: Vec::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[inline(always)]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[inline(always)]
    pub fn dims(&self) -> (u32, u32) {
        self.dims
    }

    #[inline(always)]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The points behind a handle returned by this figure
    pub fn points(&self, handle: PointsHandle) -> Option<&PointsLayer> {
        match self.layers.get(handle.0) {
            Some(Layer::Points(l)) => Some(l),
            _ => None,
        }
    }

    /// The line behind a handle returned by this figure
    pub fn line(&self, handle: LineHandle) -> Option<&LineLayer> {
        match self.layers.get(handle.0) {
            Some(Layer::Line(l)) => Some(l),
            _ => None,
        }
    }

    /// The axis ranges covering every finite point of every layer.
    /// Degenerate ranges are widened by 0.5 in both directions.
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let mut x_min = f64::MAX;
        let mut x_max = f64::MIN;
        let mut y_min = f64::MAX;
        let mut y_max = f64::MIN;
        for (x, y) in self.layers.iter().flat_map(|l| l.points().iter()) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            if *x < x_min {
                x_min = *x;
            }
            if *x > x_max {
                x_max = *x;
            }
            if *y < y_min {
                y_min = *y;
            }
            if *y > y_max {
                y_max = *y;
            }
        }
        if x_min > x_max {
            return (0.0..1.0, 0.0..1.0);
        }

        (widen(x_min, x_max), widen(y_min, y_max))
    }

    /// Render all layers onto the given drawing area
    pub fn render<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let (x_range, y_range) = self.ranges();
        debug!("rendering {} layers, x: {:?}, y: {:?}", self.layers.len(), x_range, y_range);

        root.fill(&WHITE).map_err(drawing)?;

        let mut builder = ChartBuilder::on(root);
        builder.margin(5).x_label_area_size(30).y_label_area_size(50);
        if let Some(caption) = &self.caption {
            builder.caption(caption, ("sans-serif", 20).into_font().with_color(BLACK));
        }
        let mut cc0 = builder.build_cartesian_2d(x_range, y_range).map_err(drawing)?;

        cc0.configure_mesh()
            .x_label_formatter(&|v| format!("{:.2}", v))
            .y_label_formatter(&|v| format!("{:.2}", v))
            .draw()
            .map_err(drawing)?;

        for layer in &self.layers {
            match layer {
                Layer::Points(l) => {
                    let size = l.style.size;
                    let style = l.style.color.mix(l.style.alpha).filled();
                    let anno = cc0
                        .draw_series(l.points.iter().map(|p| Circle::new(*p, size, style)))
                        .map_err(drawing)?;
                    if let Some(label) = &l.label {
                        anno.label(label)
                            .legend(move |(x, y)| Circle::new((x + 10, y), size, style));
                    }
                }
                Layer::Line(l) => {
                    let style = l.style.color.stroke_width(l.style.width);
                    let anno = cc0
                        .draw_series(LineSeries::new(l.points.clone(), style))
                        .map_err(drawing)?;
                    if let Some(label) = &l.label {
                        anno.label(label)
                            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                    }
                }
            }
        }

        if self.layers.iter().any(|l| l.label().is_some()) {
            cc0.configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(drawing)?;
        }

        root.present().map_err(drawing)
    }

    /// Render into a png file
    pub fn save_png<P: AsRef<Path> + ?Sized>(&self, path: &P) -> Result<()> {
        let root = BitMapBackend::new(path, self.dims).into_drawing_area();
        self.render(&root)?;
        info!("successfully plotted to {}", path.as_ref().display());

        Ok(())
    }

    /// Render into an svg document
    pub fn to_svg(&self) -> Result<String> {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, self.dims).into_drawing_area();
            self.render(&root)?;
        }

        Ok(buf)
    }
}

impl Surface for Figure {
    fn add_points(
        &mut self,
        points: Series,
        style: ScatterStyle,
        label: Option<String>,
    ) -> PointsHandle {
        self.layers.push(Layer::Points(PointsLayer {
            points,
            style,
            label,
        }));
        PointsHandle(self.layers.len() - 1)
    }

    fn add_line(&mut self, points: Series, style: LineStyle, label: Option<String>) -> LineHandle {
        self.layers.push(Layer::Line(LineLayer {
            points,
            style,
            label,
        }));
        LineHandle(self.layers.len() - 1)
    }
}

fn widen(min: f64, max: f64) -> Range<f64> {
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    min..max
}
