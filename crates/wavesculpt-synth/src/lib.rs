//! Wavesculpt Synth - periodic waveform synthesis
//!
//! Generates the four classic single-cycle shapes over a whole number of
//! periods on a half-open time grid, then peak-normalizes the result.
//!
//! # Core Components
//!
//! - [`Waveform`] - Sine, square, triangle and sawtooth shapes
//! - [`Oscillator`] - Phase-exact sample generator for one waveform
//! - [`WaveParams`] - Frequency, samples per period, and period count
//! - [`synthesize`] - Validate parameters and render a [`SampleSequence`]
//!
//! ```rust
//! use wavesculpt_synth::{WaveParams, Waveform, synthesize};
//!
//! let params = WaveParams::new(440.0, 100, 10);
//! let seq = synthesize(Waveform::Sine, &params).unwrap();
//!
//! assert_eq!(seq.len(), 1000);
//! assert_eq!(seq.sample_rate(), 44_000);
//! assert!((seq.peak() - 1.0).abs() < 1e-6);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! wavesculpt-synth = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod generate;
pub mod waveform;

pub use generate::{MAX_SAMPLES, SynthError, WaveParams, synthesize};
pub use waveform::{Oscillator, ParseWaveformError, Waveform};

// Re-export the sequence type synthesis produces
pub use wavesculpt_core::SampleSequence;
