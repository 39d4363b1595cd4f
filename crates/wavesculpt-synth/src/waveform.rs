//! Closed-form periodic waveforms.
//!
//! Each shape is defined over a phase measured in cycles, `p ∈ [0, 1)`.
//! Generation is exact rather than band-limited: the editor wants the
//! textbook shape at every sample so that envelopes and polarity coloring
//! line up with the visible cycle.

use core::f64::consts::TAU;
use core::fmt;
use core::str::FromStr;

use libm::sin;

/// Waveform shapes available to synthesized projects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Pure sine.
    #[default]
    Sine,
    /// Sign of the sine: `+1` on the first half-cycle, `-1` on the second,
    /// `0` exactly at the two zero-crossings.
    Square,
    /// Symmetric triangle (50% duty): rises from `-1` to `+1` then falls back.
    Triangle,
    /// Rising linear ramp from `-1` toward `+1`, resetting every cycle.
    Sawtooth,
}

impl Waveform {
    /// All shapes, in display order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Lowercase name used in persisted records and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }

    /// Amplitude at `phase` cycles. The phase is wrapped into `[0, 1)`.
    ///
    /// ```rust
    /// use wavesculpt_synth::Waveform;
    ///
    /// assert_eq!(Waveform::Square.value_at(0.25), 1.0);
    /// assert_eq!(Waveform::Triangle.value_at(0.5), 1.0);
    /// assert_eq!(Waveform::Sawtooth.value_at(0.0), -1.0);
    /// ```
    pub fn value_at(self, phase: f64) -> f64 {
        let p = phase - libm::floor(phase);
        match self {
            Waveform::Sine => sin(TAU * p),
            Waveform::Square => {
                if p == 0.0 || p == 0.5 {
                    0.0
                } else if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => {
                if p < 0.5 {
                    -1.0 + 4.0 * p
                } else {
                    3.0 - 4.0 * p
                }
            }
            Waveform::Sawtooth => -1.0 + 2.0 * p,
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known waveform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown waveform (expected sine, square, triangle or sawtooth)")]
pub struct ParseWaveformError;

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Waveform::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseWaveformError)
    }
}

/// Sample generator stepping through one waveform at a fixed number of
/// samples per cycle.
///
/// Phase is derived from an integer sample counter (`(k mod spw) / spw`),
/// so it never drifts no matter how many cycles are generated.
///
/// # Example
///
/// ```rust
/// use wavesculpt_synth::{Oscillator, Waveform};
///
/// let mut osc = Oscillator::new(Waveform::Square, 4);
/// let cycle: Vec<f32> = (0..4).map(|_| osc.advance()).collect();
/// assert_eq!(cycle, vec![0.0, 1.0, 0.0, -1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    samples_per_period: u32,
    position: u32,
}

impl Oscillator {
    /// Create an oscillator at phase zero.
    ///
    /// A `samples_per_period` of zero is treated as one.
    pub fn new(waveform: Waveform, samples_per_period: u32) -> Self {
        Self {
            waveform,
            samples_per_period: samples_per_period.max(1),
            position: 0,
        }
    }

    /// Current waveform.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Current phase in cycles, `[0, 1)`.
    pub fn phase(&self) -> f64 {
        f64::from(self.position) / f64::from(self.samples_per_period)
    }

    /// Return to phase zero.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Produce the sample at the current phase and step forward one sample.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        let value = self.waveform.value_at(self.phase()) as f32;
        self.position += 1;
        if self.position == self.samples_per_period {
            self.position = 0;
        }
        value
    }
}

impl Iterator for Oscillator {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some(self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(waveform: Waveform, spw: u32) -> Vec<f32> {
        Oscillator::new(waveform, spw).take(spw as usize).collect()
    }

    fn count_sign_changes(samples: &[f32]) -> usize {
        samples
            .windows(2)
            .filter(|w| (w[0] < 0.0) != (w[1] < 0.0))
            .count()
    }

    #[test]
    fn parse_names() {
        for w in Waveform::ALL {
            assert_eq!(w.name().parse::<Waveform>(), Ok(w));
        }
        assert_eq!("  Sine ".parse::<Waveform>(), Ok(Waveform::Sine));
        assert_eq!("pulse".parse::<Waveform>(), Err(ParseWaveformError));
    }

    #[test]
    fn sine_quarter_points() {
        let s = cycle(Waveform::Sine, 4);
        assert!(s[0].abs() < 1e-6);
        assert!((s[1] - 1.0).abs() < 1e-6);
        assert!(s[2].abs() < 1e-6);
        assert!((s[3] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn triangle_is_symmetric() {
        let s = cycle(Waveform::Triangle, 8);
        assert_eq!(s, vec![-1.0, -0.5, 0.0, 0.5, 1.0, 0.5, 0.0, -0.5]);
    }

    #[test]
    fn sawtooth_ramps() {
        let s = cycle(Waveform::Sawtooth, 4);
        assert_eq!(s, vec![-1.0, -0.5, 0.0, 0.5]);
    }

    #[test]
    fn phase_wraps() {
        for w in Waveform::ALL {
            assert!((w.value_at(1.25) - w.value_at(0.25)).abs() < 1e-12);
            assert!((w.value_at(-0.75) - w.value_at(0.25)).abs() < 1e-12);
        }
    }

    #[test]
    fn one_crossing_pair_per_cycle() {
        // Ten cycles of a sine at 100 samples per cycle cross zero twice per
        // cycle, minus the final rising edge that lies past the last sample.
        let s: Vec<f32> = Oscillator::new(Waveform::Sine, 100).take(1000).collect();
        let changes = count_sign_changes(&s);
        assert!((18..=20).contains(&changes), "got {changes} sign changes");
    }

    #[test]
    fn oscillator_reset() {
        let mut osc = Oscillator::new(Waveform::Sawtooth, 3);
        osc.advance();
        osc.advance();
        osc.reset();
        assert_eq!(osc.phase(), 0.0);
        assert_eq!(osc.advance(), -1.0);
    }

    #[test]
    fn zero_samples_per_period_is_clamped() {
        let mut osc = Oscillator::new(Waveform::Sine, 0);
        assert_eq!(osc.advance(), 0.0);
        assert_eq!(osc.phase(), 0.0);
    }
}
