//! Wavesculpt Core - sample sequences, polarity envelopes, and segmentation
//!
//! This crate holds the pure numeric half of the waveform editor. Nothing in
//! here allocates outside of building its return values, touches the
//! filesystem, or keeps state between calls.
//!
//! # Core Abstractions
//!
//! ## Sample Data
//!
//! - [`SampleSequence`] - Non-empty mono amplitudes paired with a sample rate
//! - [`peak`] / [`normalize_in_place`] - Peak-normalization with a silent-input guard
//!
//! ## Envelope Editing
//!
//! - [`EnvelopeCurve`] - Per-sample target amplitude for one polarity
//! - [`EnvelopePair`] - Positive and negative curves edited together
//! - [`apply_envelope`] - Polarity-conditioned sample substitution
//!
//! ## Polarity Segmentation
//!
//! - [`subdivide`] - Insert exact zero-crossing points between samples
//! - [`segment`] - Group the subdivided trace into single-color runs
//! - [`Polarity`] - Negative / non-negative classification
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! wavesculpt-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use wavesculpt_core::{EnvelopeCurve, SampleSequence, apply_envelope, segment};
//!
//! let audio = SampleSequence::new(vec![-0.5, 0.5], 44_000).unwrap();
//! let positive = EnvelopeCurve::from(vec![0.2]);
//! let negative = EnvelopeCurve::default();
//!
//! let edited = apply_envelope(&audio, &positive, &negative);
//! assert_eq!(edited.samples(), &[-0.5, 0.2]);
//!
//! let runs = segment(edited.samples());
//! assert_eq!(runs.len(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod envelope;
pub mod error;
pub mod segment;
pub mod sequence;

pub use envelope::{EnvelopeCurve, EnvelopePair, apply_envelope, apply_envelope_samples};
pub use error::SequenceError;
pub use segment::{Polarity, Segment, TracePoint, crossing_count, segment, subdivide};
pub use sequence::{SampleSequence, normalize_in_place, peak};
