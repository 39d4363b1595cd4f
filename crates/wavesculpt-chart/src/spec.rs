//! Backend-independent chart description.

use std::fmt;

use wavesculpt_config::Rgb;
use wavesculpt_core::peak;

/// Fraction of the peak added above and below the data.
pub const Y_MARGIN: f32 = 0.1;

/// The three charts produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Faint original plus both envelope curves.
    Final,
    /// Edited trace colored by polarity.
    Natural,
    /// Original and edited traces overlaid.
    Comparison,
}

impl ChartKind {
    /// All kinds, in production order.
    pub const ALL: [ChartKind; 3] = [ChartKind::Final, ChartKind::Natural, ChartKind::Comparison];

    /// Lowercase name, used as the artifact prefix.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Final => "final",
            ChartKind::Natural => "natural",
            ChartKind::Comparison => "comparison",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl AxisRange {
    /// Create a range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// True when the range is finite and non-empty.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Sample-index axis `[0, len]`.
    pub fn samples(len: usize) -> Self {
        Self::new(0.0, len as f32)
    }

    /// Symmetric amplitude axis around the largest magnitude in `drawn`,
    /// widened by [`Y_MARGIN`] of that magnitude.
    ///
    /// When every drawn value is zero the magnitude is taken as `1.0`.
    ///
    /// ```rust
    /// use wavesculpt_chart::AxisRange;
    ///
    /// let r = AxisRange::amplitude(&[&[0.5, -2.0], &[1.0]]);
    /// assert_eq!((r.min, r.max), (-2.2, 2.2));
    ///
    /// let silent = AxisRange::amplitude(&[&[0.0, 0.0]]);
    /// assert_eq!((silent.min, silent.max), (-1.1, 1.1));
    /// ```
    pub fn amplitude(drawn: &[&[f32]]) -> Self {
        let max = drawn.iter().map(|s| peak(s)).fold(0.0f32, f32::max);
        let max = if max > 0.0 { max } else { 1.0 };
        let extent = max + Y_MARGIN * max;
        Self::new(-extent, extent)
    }
}

/// One polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label; unlabeled series stay out of the legend.
    pub label: Option<String>,
    /// Vertices as `(x, y)` in data units; `x` is a sample index.
    pub points: Vec<(f64, f32)>,
    /// Stroke color.
    pub color: Rgb,
    /// Stroke opacity in `[0, 1]`.
    pub alpha: f32,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Series {
    /// Opaque series of width 1 over `points`.
    pub fn new(points: Vec<(f64, f32)>, color: Rgb) -> Self {
        Self {
            label: None,
            points,
            color,
            alpha: 1.0,
            width: 1.0,
        }
    }

    /// Series through `(i, values[i])`.
    pub fn indexed(values: &[f32], color: Rgb) -> Self {
        Self::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect(),
            color,
        )
    }

    /// Set the legend label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the stroke opacity.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the stroke width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// Everything a backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Which chart this is.
    pub kind: ChartKind,
    /// Raster background; vector output is transparent.
    pub background: Rgb,
    /// Polylines in draw order.
    pub series: Vec<Series>,
    /// Horizontal extent.
    pub x_range: AxisRange,
    /// Vertical extent.
    pub y_range: AxisRange,
    /// Whether labeled series get a legend.
    pub legend: bool,
}

impl ChartSpec {
    /// Labeled series, in draw order.
    pub fn legend_entries(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series
            .iter()
            .filter_map(|s| s.label.as_deref().map(|label| (label, s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_uses_every_drawn_sequence() {
        let r = AxisRange::amplitude(&[&[0.1], &[-0.5, 0.2]]);
        assert!((r.max - 0.55).abs() < 1e-6);
        assert_eq!(r.min, -r.max);
    }

    #[test]
    fn empty_drawn_set_falls_back() {
        let r = AxisRange::amplitude(&[]);
        assert_eq!((r.min, r.max), (-1.1, 1.1));
    }

    #[test]
    fn range_validity() {
        assert!(AxisRange::samples(10).is_valid());
        assert!(!AxisRange::samples(0).is_valid());
        assert!(!AxisRange::new(0.0, f32::NAN).is_valid());
    }

    #[test]
    fn indexed_series() {
        let s = Series::indexed(&[0.5, -0.5], Rgb::new(1, 2, 3))
            .with_label("x")
            .with_width(2.0);
        assert_eq!(s.points, vec![(0.0, 0.5), (1.0, -0.5)]);
        assert_eq!(s.label.as_deref(), Some("x"));
        assert_eq!(s.alpha, 1.0);
    }

    #[test]
    fn kind_names() {
        let names: Vec<_> = ChartKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["final", "natural", "comparison"]);
    }
}
