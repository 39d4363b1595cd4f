//! Chart backends.
//!
//! The engine only depends on the [`ChartRenderer`] trait. [`PlotRenderer`]
//! is the bundled backend: a PNG raster drawn straight into an RGBA buffer
//! and a transparent, axis-free SVG.

mod raster;
mod svg;

use crate::error::RenderError;
use crate::spec::ChartSpec;

pub use raster::render_png;
pub use svg::render_svg;

/// Encoded output of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    /// PNG bytes.
    pub png: Vec<u8>,
    /// SVG bytes (UTF-8).
    pub svg: Vec<u8>,
}

/// Turns a [`ChartSpec`] into raster and vector bytes.
///
/// Implementations are shared across worker threads.
pub trait ChartRenderer: Send + Sync {
    /// Render one chart.
    fn render(&self, spec: &ChartSpec) -> Result<RenderedChart, RenderError>;
}

/// Reference backend producing PNG and SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotRenderer {
    width: u32,
    height: u32,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::new(1600, 300)
    }
}

impl PlotRenderer {
    /// Backend drawing `width × height` rasters.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn check(&self, spec: &ChartSpec) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        let chart = spec.kind.name();
        if !spec.x_range.is_valid() {
            return Err(RenderError::DegenerateAxis { chart, axis: "x" });
        }
        if !spec.y_range.is_valid() {
            return Err(RenderError::DegenerateAxis { chart, axis: "y" });
        }
        Ok(())
    }
}

impl ChartRenderer for PlotRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<RenderedChart, RenderError> {
        self.check(spec)?;
        let png = render_png(spec, self.width, self.height)?;
        let svg = render_svg(spec, self.width, self.height)?;
        tracing::debug!(
            chart = spec.kind.name(),
            series = spec.series.len(),
            png_bytes = png.len(),
            svg_bytes = svg.len(),
            "chart rendered"
        );
        Ok(RenderedChart {
            png,
            svg: svg.into_bytes(),
        })
    }
}

/// Maps data coordinates into a pixel rectangle, y pointing down.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    x0: f64,
    x_span: f64,
    y1: f32,
    y_span: f32,
}

impl Viewport {
    fn new(spec: &ChartSpec, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            x0: f64::from(spec.x_range.min),
            x_span: f64::from(spec.x_range.span()),
            y1: spec.y_range.max,
            y_span: spec.y_range.span(),
        }
    }

    fn map(&self, (x, y): (f64, f32)) -> (f32, f32) {
        let fx = ((x - self.x0) / self.x_span) as f32;
        (
            self.left + fx * self.width,
            self.top + (self.y1 - y) / self.y_span * self.height,
        )
    }
}
