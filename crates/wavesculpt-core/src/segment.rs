//! Zero-crossing subdivision for two-color polarity rendering.
//!
//! Coloring a sampled waveform by sign at sample boundaries leaves a visible
//! error wherever the true zero-crossing falls between two samples: the line
//! piece spanning the crossing is drawn entirely in one color. [`subdivide`]
//! removes the error by inserting an interpolated point at `y = 0` between
//! every pair of samples whose signs differ, so color changes land exactly on
//! the crossing regardless of sample density.
//!
//! ```text
//!   y
//!   1 ●
//!      \        non-negative
//!   0 ──◆────────────────────   ◆ = synthetic crossing point
//!         \     negative
//!  -1      ●
//!     x=0  0.5  1
//! ```
//!
//! # Classification
//!
//! A value is [`Polarity::Negative`] when `< 0`, otherwise
//! [`Polarity::NonNegative`]. An exact zero is therefore non-negative.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use libm::fabs;

/// Denominator magnitude below which the crossing is placed at the midpoint.
const FLAT_EPSILON: f64 = 1e-12;

/// Polarity class used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Strictly below zero.
    Negative,
    /// Zero or above.
    NonNegative,
}

impl Polarity {
    /// Classify a single amplitude.
    #[inline]
    pub fn of(value: f32) -> Self {
        if value < 0.0 {
            Polarity::Negative
        } else {
            Polarity::NonNegative
        }
    }
}

/// One vertex of the subdivided trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Sample index, fractional for crossing points.
    ///
    /// Kept in `f64` so a crossing stays strictly between its samples at
    /// indices well past the `f32` mantissa.
    pub x: f64,
    /// Amplitude; exactly `0.0` for crossing points.
    pub y: f32,
    /// Color class of the line piece that starts at this point.
    pub class: Polarity,
    /// True for points inserted at an interpolated zero-crossing.
    pub crossing: bool,
}

/// A maximal single-class run of the subdivided trace.
///
/// Consecutive segments share their boundary vertex, so drawing them in
/// order yields one continuous polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Color class of every line piece in the run.
    pub class: Polarity,
    /// Polyline vertices as `(x, y)`.
    pub points: Vec<(f64, f32)>,
}

/// Subdivide `samples` (with `x = index`) at every strict sign change.
///
/// Every sample contributes one point tagged with its own class. Between
/// samples `i` and `i + 1` of differing class, a crossing point is inserted
/// at fraction `t = -y[i] / (y[i+1] - y[i])` (or `0.5` when the denominator
/// is effectively zero), tagged with the class of sample `i + 1`.
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::{Polarity, subdivide};
///
/// let trace = subdivide(&[1.0, -1.0]);
/// assert_eq!(trace.len(), 3);
/// assert_eq!((trace[1].x, trace[1].y), (0.5, 0.0));
/// assert_eq!(trace[1].class, Polarity::Negative);
/// assert!(trace[1].crossing);
/// ```
pub fn subdivide(samples: &[f32]) -> Vec<TracePoint> {
    let Some(&last) = samples.last() else {
        return Vec::new();
    };

    let mut trace = Vec::with_capacity(samples.len() + samples.len() / 2);

    for (i, pair) in samples.windows(2).enumerate() {
        let (y0, y1) = (pair[0], pair[1]);
        let x0 = i as f64;
        let class0 = Polarity::of(y0);
        let class1 = Polarity::of(y1);

        trace.push(TracePoint {
            x: x0,
            y: y0,
            class: class0,
            crossing: false,
        });

        if class0 != class1 {
            let dy = f64::from(y1) - f64::from(y0);
            let t = if fabs(dy) > FLAT_EPSILON {
                -f64::from(y0) / dy
            } else {
                0.5
            };
            trace.push(TracePoint {
                x: x0 + t,
                y: 0.0,
                class: class1,
                crossing: true,
            });
        }
    }

    trace.push(TracePoint {
        x: (samples.len() - 1) as f64,
        y: last,
        class: Polarity::of(last),
        crossing: false,
    });

    trace
}

/// Group the subdivided trace of `samples` into single-class runs.
///
/// The line piece between consecutive trace points takes the class of its
/// starting point. A single sample yields one degenerate one-point segment;
/// empty input yields no segments.
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::{Polarity, segment};
///
/// let runs = segment(&[1.0, -1.0]);
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].class, Polarity::NonNegative);
/// assert_eq!(runs[0].points, vec![(0.0, 1.0), (0.5, 0.0)]);
/// assert_eq!(runs[1].class, Polarity::Negative);
/// assert_eq!(runs[1].points, vec![(0.5, 0.0), (1.0, -1.0)]);
/// ```
pub fn segment(samples: &[f32]) -> Vec<Segment> {
    let trace = subdivide(samples);
    let Some(first) = trace.first() else {
        return Vec::new();
    };

    if trace.len() == 1 {
        return vec![Segment {
            class: first.class,
            points: vec![(first.x, first.y)],
        }];
    }

    let mut segments: Vec<Segment> = Vec::new();
    for piece in trace.windows(2) {
        let (start, end) = (piece[0], piece[1]);
        match segments.last_mut() {
            Some(current) if current.class == start.class => {
                current.points.push((end.x, end.y));
            }
            _ => {
                segments.push(Segment {
                    class: start.class,
                    points: vec![(start.x, start.y), (end.x, end.y)],
                });
            }
        }
    }

    segments
}

/// Number of strict sign changes between consecutive samples.
///
/// Equals the number of crossing points [`subdivide`] inserts.
pub fn crossing_count(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|pair| Polarity::of(pair[0]) != Polarity::of(pair[1]))
        .count()
}
