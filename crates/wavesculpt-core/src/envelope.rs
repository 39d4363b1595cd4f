//! Polarity-conditioned envelope substitution.
//!
//! An envelope edit carries two hand-drawn curves: one for the positive half
//! of each cycle and one for the negative half. Applying the edit replaces
//! every strictly positive sample with the positive curve's value at the same
//! index, and every strictly negative sample with the negative curve's value.
//! Samples that are exactly zero are never substituted.
//!
//! Curves are indexed by sample position. A curve that is shorter than the
//! audio only covers its own range; indices past the end keep the original
//! sample. [`EnvelopePair::fit`] produces curves of exactly the audio length
//! (truncated or zero-padded) for callers that want full coverage.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::SampleSequence;

/// Target amplitudes for one polarity, one value per sample index.
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::EnvelopeCurve;
///
/// let curve = EnvelopeCurve::from(vec![0.5, 0.4, 0.3]);
/// assert_eq!(curve.fitted(2).values(), &[0.5, 0.4]);
/// assert_eq!(curve.fitted(5).values(), &[0.5, 0.4, 0.3, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeCurve {
    values: Vec<f32>,
}

impl EnvelopeCurve {
    /// An all-zero curve covering `len` samples.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: core::iter::repeat_n(0.0, len).collect(),
        }
    }

    /// Curve values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of sample positions the curve covers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the curve covers no sample positions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` past the curve's coverage.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Copy of the curve truncated or zero-padded to exactly `len` values.
    pub fn fitted(&self, len: usize) -> Self {
        let mut values: Vec<f32> = self.values.iter().copied().take(len).collect();
        values.resize(len, 0.0);
        Self { values }
    }

    /// Consume the curve, returning its values.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

impl From<Vec<f32>> for EnvelopeCurve {
    fn from(values: Vec<f32>) -> Self {
        Self { values }
    }
}

impl From<&[f32]> for EnvelopeCurve {
    fn from(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

/// The positive and negative curves of one edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopePair {
    /// Applied where the original sample is `> 0`.
    pub positive: EnvelopeCurve,
    /// Applied where the original sample is `< 0`.
    pub negative: EnvelopeCurve,
}

impl EnvelopePair {
    /// Pair two curves.
    pub fn new(positive: impl Into<EnvelopeCurve>, negative: impl Into<EnvelopeCurve>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    /// All-zero curves of `len` samples, the default edit of a fresh project.
    pub fn zeros(len: usize) -> Self {
        Self {
            positive: EnvelopeCurve::zeros(len),
            negative: EnvelopeCurve::zeros(len),
        }
    }

    /// Both curves truncated or zero-padded to `len`.
    pub fn fit(&self, len: usize) -> Self {
        Self {
            positive: self.positive.fitted(len),
            negative: self.negative.fitted(len),
        }
    }

    /// Apply both curves to `audio`. See [`apply_envelope`].
    pub fn apply(&self, audio: &SampleSequence) -> SampleSequence {
        apply_envelope(audio, &self.positive, &self.negative)
    }
}

/// Substitute samples by polarity.
///
/// For each index `i`: a positive sample becomes `positive[i]` and a negative
/// sample becomes `negative[i]`, provided the curve covers `i`. Zero samples
/// and uncovered indices pass through. The output always has the input's
/// length and sample rate.
///
/// # Example
///
/// ```rust
/// use wavesculpt_core::{EnvelopeCurve, SampleSequence, apply_envelope};
///
/// let audio = SampleSequence::new(vec![-0.5, 0.5, 0.0], 8000).unwrap();
/// let edited = apply_envelope(
///     &audio,
///     &EnvelopeCurve::from(vec![0.2, 0.3, 0.4]),
///     &EnvelopeCurve::default(),
/// );
/// assert_eq!(edited.samples(), &[-0.5, 0.3, 0.0]);
/// ```
pub fn apply_envelope(
    audio: &SampleSequence,
    positive: &EnvelopeCurve,
    negative: &EnvelopeCurve,
) -> SampleSequence {
    let samples = apply_envelope_samples(audio.samples(), positive.values(), negative.values());
    // Same length by construction; the fallback keeps this total.
    audio
        .with_samples(samples)
        .unwrap_or_else(|_| audio.clone())
}

/// Slice form of [`apply_envelope`].
pub fn apply_envelope_samples(audio: &[f32], positive: &[f32], negative: &[f32]) -> Vec<f32> {
    audio
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            if sample > 0.0 {
                positive.get(i).copied().unwrap_or(sample)
            } else if sample < 0.0 {
                negative.get(i).copied().unwrap_or(sample)
            } else {
                sample
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(samples: &[f32]) -> SampleSequence {
        SampleSequence::new(samples.to_vec(), 1000).unwrap()
    }

    #[test]
    fn positive_covered_negative_uncovered() {
        let edited = apply_envelope(
            &seq(&[-0.5, 0.5]),
            &EnvelopeCurve::from(vec![0.2]),
            &EnvelopeCurve::default(),
        );
        assert_eq!(edited.samples(), &[-0.5, 0.2]);
    }

    #[test]
    fn zero_samples_never_substituted() {
        let out = apply_envelope_samples(&[0.0, 0.0], &[0.9, 0.9], &[-0.9, -0.9]);
        assert_eq!(out, vec![0.0, 0.0]);
    }

    #[test]
    fn negative_curve_applies_to_negative_samples() {
        let out = apply_envelope_samples(&[-1.0, 1.0, -1.0], &[], &[-0.1, -0.2, -0.3]);
        assert_eq!(out, vec![-0.1, 1.0, -0.3]);
    }

    #[test]
    fn longer_curves_are_ignored_past_audio() {
        let out = apply_envelope_samples(&[0.5], &[0.1, 0.2, 0.3], &[-0.1, -0.2]);
        assert_eq!(out, vec![0.1]);
    }

    #[test]
    fn fitted_pads_with_zero() {
        let pair = EnvelopePair::new(vec![0.4f32], Vec::<f32>::new()).fit(3);
        assert_eq!(pair.positive.values(), &[0.4, 0.0, 0.0]);
        assert_eq!(pair.negative.values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn fitted_pair_substitutes_padding() {
        // After fitting, every index is covered, so padded positions zero out.
        let audio = seq(&[0.5, 0.5, -0.5]);
        let edited = EnvelopePair::new(vec![0.3f32], Vec::<f32>::new()).fit(audio.len()).apply(&audio);
        assert_eq!(edited.samples(), &[0.3, 0.0, 0.0]);
    }

    #[test]
    fn output_keeps_sample_rate() {
        let audio = SampleSequence::new(vec![0.5, -0.5], 44000).unwrap();
        let edited = EnvelopePair::zeros(2).apply(&audio);
        assert_eq!(edited.sample_rate(), 44000);
        assert_eq!(edited.len(), 2);
    }

    #[test]
    fn curve_accessors() {
        let curve = EnvelopeCurve::from(&[0.1f32, 0.2][..]);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.get(1), Some(0.2));
        assert_eq!(curve.get(2), None);
        assert!(EnvelopeCurve::default().is_empty());
        assert_eq!(EnvelopeCurve::zeros(3).values(), &[0.0, 0.0, 0.0]);
    }
}
