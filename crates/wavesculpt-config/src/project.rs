//! Persisted project fields.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::validate_envelope;

/// Synthesis parameters as stored on a project.
///
/// Integer fields are signed so that a record holding a nonsensical value
/// still deserializes; validation rejects it when a run starts.
///
/// # JSON Format
///
/// ```json
/// { "freq": 440.0, "spw": 100, "periods": 10 }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WaveParameters {
    /// Fundamental frequency in Hz.
    #[serde(default = "default_freq")]
    pub freq: f64,
    /// Samples per period.
    #[serde(default = "default_spw")]
    pub spw: i64,
    /// Number of periods.
    #[serde(default = "default_periods")]
    pub periods: i64,
}

fn default_freq() -> f64 {
    440.0
}

fn default_spw() -> i64 {
    100
}

fn default_periods() -> i64 {
    10
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            freq: default_freq(),
            spw: default_spw(),
            periods: default_periods(),
        }
    }
}

impl WaveParameters {
    /// Create parameters.
    pub fn new(freq: f64, spw: i64, periods: i64) -> Self {
        Self { freq, spw, periods }
    }

    /// Audio length these parameters produce, if both counts are positive.
    pub fn total_samples(&self) -> Option<u64> {
        let spw = u64::try_from(self.spw).ok()?;
        let periods = u64::try_from(self.periods).ok()?;
        spw.checked_mul(periods)
    }
}

/// The envelope curves of one edit.
///
/// Either array may be absent or shorter than the audio; the engine
/// zero-extends and truncates them to audio length.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnvelopeData {
    /// Curve applied to positive samples.
    #[serde(default)]
    pub positive: Vec<f32>,
    /// Curve applied to negative samples.
    #[serde(default)]
    pub negative: Vec<f32>,
}

impl EnvelopeData {
    /// Pair two curves.
    pub fn new(positive: Vec<f32>, negative: Vec<f32>) -> Self {
        Self { positive, negative }
    }

    /// All-zero curves of `len` samples.
    pub fn zeros(len: usize) -> Self {
        Self {
            positive: vec![0.0; len],
            negative: vec![0.0; len],
        }
    }

    /// True when neither curve has any values.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Read a curve document from `path` and reject non-finite values.
    ///
    /// Either key may be omitted; a missing curve is empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let data: Self = serde_json::from_str(&text)?;
        validate_envelope(&data)?;
        Ok(data)
    }
}

/// Where a project's audio comes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Synthesized sine.
    #[default]
    Sine,
    /// Synthesized square.
    Square,
    /// Synthesized triangle.
    Triangle,
    /// Synthesized sawtooth.
    Sawtooth,
    /// A recording supplied by the user.
    Uploaded,
}

impl SourceKind {
    /// All source kinds.
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Sine,
        SourceKind::Square,
        SourceKind::Triangle,
        SourceKind::Sawtooth,
        SourceKind::Uploaded,
    ];

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Sine => "sine",
            SourceKind::Square => "square",
            SourceKind::Triangle => "triangle",
            SourceKind::Sawtooth => "sawtooth",
            SourceKind::Uploaded => "uploaded",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Sine => "Sine Wave",
            SourceKind::Square => "Square Wave",
            SourceKind::Triangle => "Triangle Wave",
            SourceKind::Sawtooth => "Sawtooth Wave",
            SourceKind::Uploaded => "Uploaded File",
        }
    }

    /// True for the four synthesized kinds.
    pub fn is_synthesized(self) -> bool {
        self != SourceKind::Uploaded
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown source kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("curves.json");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn envelope_load_reads_partial_document() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, r#"{"positive": [0.25, 0.5]}"#);
        let data = EnvelopeData::load(&path).unwrap();
        assert_eq!(data, EnvelopeData::new(vec![0.25, 0.5], vec![]));
    }

    #[test]
    fn envelope_load_rejects_overflowing_values() {
        let dir = TempDir::new().unwrap();
        // 1e39 parses but does not fit in an f32.
        let path = write_doc(&dir, r#"{"positive": [0.1], "negative": [-0.1, 1e39]}"#);
        let err = EnvelopeData::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "{err}");
        assert!(err.to_string().contains("negative envelope value at index 1"), "{err}");
    }

    #[test]
    fn envelope_load_reports_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, r#"{"positive": "loud"}"#);
        assert!(matches!(EnvelopeData::load(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn envelope_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = EnvelopeData::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.path().is_some());
    }

    #[test]
    fn wave_parameters_defaults() {
        let params: WaveParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params, WaveParameters::new(440.0, 100, 10));
        assert_eq!(params.total_samples(), Some(1000));
    }

    #[test]
    fn wave_parameters_keep_negative_values() {
        let params: WaveParameters =
            serde_json::from_str(r#"{"freq": -1, "spw": -5, "periods": 3}"#).unwrap();
        assert_eq!(params.spw, -5);
        assert_eq!(params.total_samples(), None);
    }

    #[test]
    fn envelope_roundtrip() {
        let env = EnvelopeData::new(vec![0.5, 0.25], vec![-0.5]);
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"positive":[0.5,0.25],"negative":[-0.5]}"#);
        assert_eq!(serde_json::from_str::<EnvelopeData>(&json).unwrap(), env);
    }

    #[test]
    fn envelope_zeros() {
        let env = EnvelopeData::zeros(3);
        assert_eq!(env.positive, vec![0.0; 3]);
        assert!(!env.is_empty());
        assert!(EnvelopeData::default().is_empty());
    }

    #[test]
    fn source_kind_serde() {
        assert_eq!(
            serde_json::to_string(&SourceKind::Sawtooth).unwrap(),
            "\"sawtooth\""
        );
        assert_eq!(
            serde_json::from_str::<SourceKind>("\"uploaded\"").unwrap(),
            SourceKind::Uploaded
        );
    }

    #[test]
    fn source_kind_parse() {
        assert_eq!("Triangle".parse::<SourceKind>(), Ok(SourceKind::Triangle));
        assert!("noise".parse::<SourceKind>().is_err());
        assert!(!SourceKind::Uploaded.is_synthesized());
        assert_eq!(SourceKind::Square.label(), "Square Wave");
    }
}
