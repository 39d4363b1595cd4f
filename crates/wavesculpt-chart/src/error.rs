//! Chart backend errors.

use thiserror::Error;

/// Failures raised while turning a [`ChartSpec`](crate::ChartSpec) into bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Raster dimensions must be non-zero.
    #[error("invalid raster size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An axis range is empty or not finite.
    #[error("cannot draw {chart} chart: degenerate {axis} axis")]
    DegenerateAxis {
        /// Chart name.
        chart: &'static str,
        /// `x` or `y`.
        axis: &'static str,
    },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Raster(#[from] image::ImageError),

    /// SVG serialization failed.
    #[error("SVG serialization failed")]
    Vector(#[from] std::fmt::Error),

    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_axis_display() {
        let err = RenderError::DegenerateAxis {
            chart: "natural",
            axis: "x",
        };
        assert_eq!(err.to_string(), "cannot draw natural chart: degenerate x axis");
    }

    #[test]
    fn backend_display_is_verbatim() {
        assert_eq!(
            RenderError::Backend("plotter offline".into()).to_string(),
            "plotter offline"
        );
    }
}
