//! Shared CLI helpers used across multiple commands.

use std::path::Path;

use anyhow::Context;
use clap::{Args, ValueEnum};
use wavesculpt_config::{EngineSettings, EnvelopeData, SourceKind, WaveParameters};
use wavesculpt_synth::Waveform;

/// Waveform shapes for the CLI.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliWaveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl From<CliWaveform> for Waveform {
    fn from(w: CliWaveform) -> Self {
        match w {
            CliWaveform::Sine => Waveform::Sine,
            CliWaveform::Square => Waveform::Square,
            CliWaveform::Triangle => Waveform::Triangle,
            CliWaveform::Sawtooth => Waveform::Sawtooth,
        }
    }
}

impl From<CliWaveform> for SourceKind {
    fn from(w: CliWaveform) -> Self {
        match w {
            CliWaveform::Sine => SourceKind::Sine,
            CliWaveform::Square => SourceKind::Square,
            CliWaveform::Triangle => SourceKind::Triangle,
            CliWaveform::Sawtooth => SourceKind::Sawtooth,
        }
    }
}

/// Synthesis parameters shared by every command that can generate audio.
#[derive(Args, Clone, Debug)]
pub struct WaveArgs {
    /// Waveform shape
    #[arg(long, value_enum, default_value_t = CliWaveform::Sine)]
    pub kind: CliWaveform,

    /// Frequency in Hz
    #[arg(long, default_value = "440.0")]
    pub freq: f64,

    /// Samples per period
    #[arg(long, default_value = "100")]
    pub spw: i64,

    /// Number of periods
    #[arg(long, default_value = "10")]
    pub periods: i64,
}

impl WaveArgs {
    /// Parameters in their persisted shape.
    pub fn parameters(&self) -> WaveParameters {
        WaveParameters::new(self.freq, self.spw, self.periods)
    }
}

/// Settings from an explicit path, or the user settings file if it exists.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<EngineSettings> {
    let settings = match path {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::load_or_default(wavesculpt_config::default_settings_path())?,
    };
    Ok(settings)
}

/// Load an `{"positive": [...], "negative": [...]}` document.
pub fn load_envelope(path: &Path) -> anyhow::Result<EnvelopeData> {
    EnvelopeData::load(path).with_context(|| format!("invalid curve document {}", path.display()))
}
