//! Parameter validation and whole-buffer synthesis.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use thiserror::Error;
use wavesculpt_core::{SampleSequence, SequenceError};

use crate::{Oscillator, Waveform};

/// Largest buffer [`synthesize`] will allocate.
pub const MAX_SAMPLES: u64 = 10_000_000;

/// Synthesis parameter errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SynthError {
    /// Frequency must be finite and strictly positive.
    #[error("frequency must be a positive number of Hz, got {0}")]
    InvalidFrequency(f64),

    /// At least one sample per period is required.
    #[error("samples per period must be positive")]
    ZeroSamplesPerPeriod,

    /// At least one period is required.
    #[error("period count must be positive")]
    ZeroPeriods,

    /// `frequency × samples_per_period` truncates to zero.
    #[error("derived sample rate {0} Hz is below 1 Hz")]
    SampleRateTooLow(f64),

    /// `samples_per_period × period_count` exceeds [`MAX_SAMPLES`].
    #[error("{requested} samples requested, limit is {limit}")]
    TooManySamples {
        /// Requested buffer length.
        requested: u64,
        /// Allocation limit.
        limit: u64,
    },

    /// The generated buffer violated a sequence invariant.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Closed-form synthesis parameters.
///
/// Total length is `samples_per_period × period_count`; the playback rate is
/// `frequency_hz × samples_per_period`, truncated to whole Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Fundamental frequency in Hz.
    pub frequency_hz: f64,
    /// Samples in one cycle.
    pub samples_per_period: u32,
    /// Whole cycles to render.
    pub period_count: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::new(440.0, 100, 10)
    }
}

impl WaveParams {
    /// Bundle parameters without validating them.
    pub const fn new(frequency_hz: f64, samples_per_period: u32, period_count: u32) -> Self {
        Self {
            frequency_hz,
            samples_per_period,
            period_count,
        }
    }

    /// Check every parameter, returning the first violation.
    pub fn validate(&self) -> Result<(), SynthError> {
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(SynthError::InvalidFrequency(self.frequency_hz));
        }
        if self.samples_per_period == 0 {
            return Err(SynthError::ZeroSamplesPerPeriod);
        }
        if self.period_count == 0 {
            return Err(SynthError::ZeroPeriods);
        }
        self.sample_rate()?;
        self.total_samples()?;
        Ok(())
    }

    /// Derived playback rate in whole Hz.
    pub fn sample_rate(&self) -> Result<u32, SynthError> {
        let rate = libm::floor(self.frequency_hz * f64::from(self.samples_per_period));
        if !(1.0..=f64::from(u32::MAX)).contains(&rate) {
            return Err(SynthError::SampleRateTooLow(rate));
        }
        Ok(rate as u32)
    }

    /// Buffer length, bounded by [`MAX_SAMPLES`].
    pub fn total_samples(&self) -> Result<usize, SynthError> {
        let requested = u64::from(self.samples_per_period) * u64::from(self.period_count);
        if requested > MAX_SAMPLES {
            return Err(SynthError::TooManySamples {
                requested,
                limit: MAX_SAMPLES,
            });
        }
        Ok(requested as usize)
    }

    /// Rendered duration in seconds, `period_count / frequency_hz`.
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.period_count) / self.frequency_hz
    }
}

/// Render `params.period_count` cycles of `waveform` and peak-normalize.
///
/// Sample `k` sits at time `k / rate` on a half-open grid, so the last
/// sample stops one step short of the end of the final cycle. A buffer that
/// is identically zero passes through unnormalized.
///
/// # Errors
///
/// Any [`WaveParams::validate`] failure.
pub fn synthesize(waveform: Waveform, params: &WaveParams) -> Result<SampleSequence, SynthError> {
    params.validate()?;
    let rate = params.sample_rate()?;
    let len = params.total_samples()?;

    let samples: Vec<f32> = Oscillator::new(waveform, params.samples_per_period)
        .take(len)
        .collect();

    Ok(SampleSequence::normalized(samples, rate)?)
}
