//! Chart assembly and rendering for wavesculpt.
//!
//! This crate provides:
//!
//! - **Specifications**: [`ChartSpec`], a backend-neutral list of styled
//!   polylines with axis ranges
//! - **Assembly**: [`ChartInputs`] builds the `final`, `natural` and
//!   `comparison` charts from one run's audio and envelope
//! - **Rendering**: the [`ChartRenderer`] trait and the bundled
//!   [`PlotRenderer`] (PNG + SVG)
//!
//! ## Quick Start
//!
//! ```rust
//! use wavesculpt_chart::{ChartInputs, ChartRenderer, PlotRenderer};
//! use wavesculpt_config::ColorScheme;
//! use wavesculpt_core::{EnvelopePair, SampleSequence};
//!
//! let original = SampleSequence::new(vec![0.0, 1.0, 0.0, -1.0], 4)?;
//! let envelope = EnvelopePair::zeros(original.len());
//! let colors = ColorScheme::default();
//! let inputs = ChartInputs {
//!     original: &original,
//!     modified: &original,
//!     envelope: &envelope,
//!     colors: &colors,
//! };
//!
//! let renderer = PlotRenderer::new(320, 80);
//! for spec in inputs.all() {
//!     let chart = renderer.render(&spec)?;
//!     assert!(!chart.png.is_empty());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod assemble;
mod error;
mod render;
mod spec;

pub use assemble::{ChartInputs, comparison_chart, final_chart, natural_chart};
pub use error::RenderError;
pub use render::{ChartRenderer, PlotRenderer, RenderedChart, render_png, render_svg};
pub use spec::{AxisRange, ChartKind, ChartSpec, Series, Y_MARGIN};
