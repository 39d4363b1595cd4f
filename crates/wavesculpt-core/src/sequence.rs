//! Normalized mono sample buffers.
//!
//! [`SampleSequence`] is the interchange type between every stage of the
//! editor: synthesis and decoding produce one, the envelope engine maps one
//! to another, and the codec and chart assembler consume them.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::SequenceError;
use libm::fabsf;

/// Maximum absolute amplitude of a signal.
///
/// Returns `0.0` for empty or all-zero input. NaN samples are ignored.
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::peak;
///
/// assert_eq!(peak(&[0.25, -0.75, 0.5]), 0.75);
/// assert_eq!(peak(&[]), 0.0);
/// ```
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &s| acc.max(fabsf(s)))
}

/// Divide every sample by the signal peak so the result peaks at exactly 1.0.
///
/// Silent input (peak of zero) is left untouched rather than divided by
/// zero. Returns the peak that was divided out.
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::normalize_in_place;
///
/// let mut samples = vec![0.5, -0.25];
/// let scale = normalize_in_place(&mut samples);
/// assert_eq!(scale, 0.5);
/// assert_eq!(samples, vec![1.0, -0.5]);
///
/// let mut silence = vec![0.0; 4];
/// assert_eq!(normalize_in_place(&mut silence), 0.0);
/// assert!(silence.iter().all(|&s| s == 0.0));
/// ```
pub fn normalize_in_place(samples: &mut [f32]) -> f32 {
    let max = peak(samples);
    if max > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= max;
        }
    }
    max
}

/// A non-empty sequence of mono amplitudes with its playback rate.
///
/// Sequences produced by synthesis or decoding are peak-normalized to
/// `[-1.0, 1.0]`; edited sequences may hold whatever amplitudes the envelope
/// curves carried. The constructor only enforces the structural invariants
/// (non-empty, positive rate).
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::SampleSequence;
///
/// let seq = SampleSequence::normalized(vec![2.0, -4.0], 8000).unwrap();
/// assert_eq!(seq.samples(), &[0.5, -1.0]);
/// assert_eq!(seq.sample_rate(), 8000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleSequence {
    /// Wrap samples as-is.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, SequenceError> {
        if samples.is_empty() {
            return Err(SequenceError::Empty);
        }
        if sample_rate == 0 {
            return Err(SequenceError::ZeroSampleRate);
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Wrap samples after dividing out their peak.
    pub fn normalized(mut samples: Vec<f32>, sample_rate: u32) -> Result<Self, SequenceError> {
        normalize_in_place(&mut samples);
        Self::new(samples, sample_rate)
    }

    /// Build a sequence at the same rate from a replacement buffer of equal length.
    pub fn with_samples(&self, samples: Vec<f32>) -> Result<Self, SequenceError> {
        if samples.len() != self.samples.len() {
            return Err(SequenceError::LengthMismatch {
                expected: self.samples.len(),
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// Sample values.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Playback rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples (always at least one).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum absolute amplitude.
    pub fn peak(&self) -> f32 {
        peak(&self.samples)
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Consume the sequence, returning the raw buffer and rate.
    pub fn into_parts(self) -> (Vec<f32>, u32) {
        (self.samples, self.sample_rate)
    }
}

impl AsRef<[f32]> for SampleSequence {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(
            SampleSequence::new(Vec::new(), 44100),
            Err(SequenceError::Empty)
        );
    }

    #[test]
    fn rejects_zero_rate() {
        assert_eq!(
            SampleSequence::new(vec![0.1], 0),
            Err(SequenceError::ZeroSampleRate)
        );
    }

    #[test]
    fn normalized_peaks_at_one() {
        let seq = SampleSequence::normalized(vec![0.1, -0.3, 0.2], 1000).unwrap();
        assert!((seq.peak() - 1.0).abs() < 1e-6);
        assert!((seq.samples()[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_silence_passes_through() {
        let seq = SampleSequence::normalized(vec![0.0; 8], 1000).unwrap();
        assert!(seq.samples().iter().all(|&s| s == 0.0));
        assert!(seq.samples().iter().all(|s| !s.is_nan()));
    }

    #[test]
    fn with_samples_keeps_rate() {
        let seq = SampleSequence::new(vec![0.5, 0.5], 22050).unwrap();
        let replaced = seq.with_samples(vec![0.1, 0.2]).unwrap();
        assert_eq!(replaced.sample_rate(), 22050);
        assert_eq!(replaced.samples(), &[0.1, 0.2]);
    }

    #[test]
    fn with_samples_rejects_resize() {
        let seq = SampleSequence::new(vec![0.5, 0.5], 22050).unwrap();
        assert_eq!(
            seq.with_samples(vec![0.1]),
            Err(SequenceError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn duration() {
        let seq = SampleSequence::new(vec![0.0; 44000], 44000).unwrap();
        assert!((seq.duration_secs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn peak_ignores_sign() {
        assert_eq!(peak(&[-0.9, 0.3]), 0.9);
    }
}
