//! Property-based tests for wavesculpt-core.
//!
//! Tests envelope length preservation, crossing placement, and
//! normalization using proptest for randomized input generation.

use proptest::prelude::*;
use wavesculpt_core::{
    EnvelopeCurve, EnvelopePair, SampleSequence, apply_envelope, crossing_count, peak, segment,
    subdivide,
};

/// Amplitudes bounded away from zero so every sign change is strict on both sides.
fn nonzero_amplitude() -> impl Strategy<Value = f32> {
    prop_oneof![-1.0f32..-1e-3f32, 1e-3f32..1.0f32]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Output length equals input length for any combination of curve lengths.
    #[test]
    fn envelope_preserves_length(
        audio in prop::collection::vec(-1.0f32..=1.0f32, 1..256),
        positive in prop::collection::vec(-1.0f32..=1.0f32, 0..512),
        negative in prop::collection::vec(-1.0f32..=1.0f32, 0..512),
    ) {
        let seq = SampleSequence::new(audio.clone(), 8000).unwrap();
        let edited = apply_envelope(&seq, &EnvelopeCurve::from(positive.clone()), &EnvelopeCurve::from(negative.clone()));
        prop_assert_eq!(edited.len(), audio.len());

        let fitted = EnvelopePair::new(positive, negative).fit(audio.len());
        prop_assert_eq!(fitted.positive.len(), audio.len());
        prop_assert_eq!(fitted.negative.len(), audio.len());
        prop_assert_eq!(fitted.apply(&seq).len(), audio.len());
    }

    /// Substitution never touches zero samples and never crosses polarity rules.
    #[test]
    fn envelope_substitutes_by_sign(
        audio in prop::collection::vec(prop_oneof![Just(0.0f32), -1.0f32..=1.0f32], 1..128),
        curve_value in -1.0f32..=1.0f32,
    ) {
        let seq = SampleSequence::new(audio.clone(), 8000).unwrap();
        let positive = EnvelopeCurve::from(vec![curve_value; audio.len()]);
        let negative = EnvelopeCurve::from(vec![-curve_value; audio.len()]);
        let edited = apply_envelope(&seq, &positive, &negative);

        for (orig, out) in audio.iter().zip(edited.samples()) {
            if *orig > 0.0 {
                prop_assert_eq!(*out, curve_value);
            } else if *orig < 0.0 {
                prop_assert_eq!(*out, -curve_value);
            } else {
                prop_assert_eq!(*out, *orig);
            }
        }
    }

    /// k sign changes yield exactly k crossing points at y = 0, strictly
    /// between their bounding samples.
    #[test]
    fn crossings_are_exact(samples in prop::collection::vec(nonzero_amplitude(), 2..256)) {
        let expected = crossing_count(&samples);
        let trace = subdivide(&samples);
        let crossings: Vec<_> = trace.iter().filter(|p| p.crossing).collect();

        prop_assert_eq!(crossings.len(), expected);
        prop_assert_eq!(trace.len(), samples.len() + expected);

        for point in crossings {
            prop_assert!(point.y.abs() < 1e-6);
            let left = point.x.floor();
            prop_assert!(point.x > left && point.x < left + 1.0,
                "crossing x={} not strictly inside ({}, {})", point.x, left, left + 1.0);
        }
    }

    /// Single-polarity signals produce no crossing points and a single segment.
    #[test]
    fn single_polarity_has_no_crossings(
        magnitudes in prop::collection::vec(0.0f32..1.0f32, 1..128),
        negative in any::<bool>(),
    ) {
        let samples: Vec<f32> = if negative {
            magnitudes.iter().map(|m| -(m + 1e-3)).collect()
        } else {
            magnitudes
        };
        prop_assert!(subdivide(&samples).iter().all(|p| !p.crossing));
        prop_assert_eq!(segment(&samples).len(), 1);
    }

    /// Segments alternate class and share boundary vertices.
    #[test]
    fn segments_form_continuous_polyline(samples in prop::collection::vec(-1.0f32..=1.0f32, 2..128)) {
        let runs = segment(&samples);
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].class, pair[1].class);
            prop_assert_eq!(pair[0].points.last(), pair[1].points.first());
        }
    }

    /// Normalized sequences peak at exactly 1.0 unless silent.
    #[test]
    fn normalization_peaks_at_one(samples in prop::collection::vec(-100.0f32..100.0f32, 1..256)) {
        let seq = SampleSequence::normalized(samples.clone(), 44100).unwrap();
        if peak(&samples) > 0.0 {
            prop_assert!((seq.peak() - 1.0).abs() < 1e-6);
        } else {
            prop_assert_eq!(seq.peak(), 0.0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Crossings stay strictly between their samples deep into long recordings.
    #[test]
    fn crossings_stay_inside_at_large_indices(
        offset in 1usize << 16..1usize << 22,
        before in 1e-4f32..1.0f32,
        after in 1e-4f32..1.0f32,
    ) {
        let mut samples = vec![0.25f32; offset + 2];
        samples[offset] = before;
        samples[offset + 1] = -after;

        let trace = subdivide(&samples);
        let crossings: Vec<_> = trace.iter().filter(|p| p.crossing).collect();
        prop_assert_eq!(crossings.len(), 1);

        let x = crossings[0].x;
        let left = offset as f64;
        prop_assert!(x > left && x < left + 1.0, "crossing x={} not inside ({}, {})", x, left, left + 1.0);
    }
}
