//! Property tests for waveform synthesis.

use proptest::prelude::*;
use wavesculpt_synth::{WaveParams, Waveform, synthesize};

fn any_waveform() -> impl Strategy<Value = Waveform> {
    prop::sample::select(Waveform::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn peak_is_one_unless_silent(
        waveform in any_waveform(),
        freq in 1.0f64..5000.0,
        spw in 1u32..400,
        periods in 1u32..20,
    ) {
        let seq = synthesize(waveform, &WaveParams::new(freq, spw, periods)).unwrap();
        let peak = seq.peak();
        prop_assert!(peak == 0.0 || (peak - 1.0).abs() < 1e-6);
        prop_assert!(seq.samples().iter().all(|s| s.abs() <= 1.0 + 1e-6));
    }

    #[test]
    fn length_and_rate_follow_parameters(
        waveform in any_waveform(),
        freq in 1.0f64..5000.0,
        spw in 1u32..400,
        periods in 1u32..20,
    ) {
        let params = WaveParams::new(freq, spw, periods);
        let seq = synthesize(waveform, &params).unwrap();
        prop_assert_eq!(seq.len(), (spw * periods) as usize);
        prop_assert_eq!(seq.sample_rate(), (freq * f64::from(spw)).floor() as u32);
    }

    #[test]
    fn every_period_repeats(
        waveform in any_waveform(),
        spw in 2u32..200,
        periods in 2u32..6,
    ) {
        let seq = synthesize(waveform, &WaveParams::new(100.0, spw, periods)).unwrap();
        let samples = seq.samples();
        let n = spw as usize;
        for k in n..samples.len() {
            prop_assert_eq!(samples[k], samples[k - n]);
        }
    }
}

#[test]
fn scenario_sine_440() {
    let seq = synthesize(Waveform::Sine, &WaveParams::new(440.0, 100, 10)).unwrap();
    assert_eq!(seq.len(), 1000);
    assert_eq!(seq.sample_rate(), 44_000);
    assert!((seq.peak() - 1.0).abs() < 1e-6);
}
