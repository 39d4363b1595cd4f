//! Waveform source resolution.

use wavesculpt_config::{SourceKind, WaveParameters, validate_wave_parameters};
use wavesculpt_core::SampleSequence;
use wavesculpt_synth::{WaveParams, Waveform, synthesize};

use crate::error::ProcessingError;

/// Where a run's audio comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum WaveSpec {
    /// Generate a closed-form waveform.
    Synthesized {
        /// Shape.
        kind: Waveform,
        /// Frequency, samples per period and period count.
        params: WaveParams,
    },
    /// Decode a stored recording.
    Loaded {
        /// WAV container bytes.
        bytes: Vec<u8>,
    },
}

impl WaveSpec {
    /// Build the spec a project record describes.
    ///
    /// Synthesized kinds use `params`; `uploaded` needs `source` bytes.
    pub fn from_record(
        kind: SourceKind,
        params: &WaveParameters,
        source: Option<Vec<u8>>,
    ) -> Result<Self, ProcessingError> {
        match (waveform_for(kind), source) {
            (Some(waveform), _) => Ok(WaveSpec::Synthesized {
                kind: waveform,
                params: wave_params(params)?,
            }),
            (None, Some(bytes)) => Ok(WaveSpec::Loaded { bytes }),
            (None, None) => Err(ProcessingError::InvalidParameters(
                "uploaded project has no source recording".to_string(),
            )),
        }
    }
}

/// Synthesis shape for a source kind; `None` for `uploaded`.
pub fn waveform_for(kind: SourceKind) -> Option<Waveform> {
    match kind {
        SourceKind::Sine => Some(Waveform::Sine),
        SourceKind::Square => Some(Waveform::Square),
        SourceKind::Triangle => Some(Waveform::Triangle),
        SourceKind::Sawtooth => Some(Waveform::Sawtooth),
        SourceKind::Uploaded => None,
    }
}

/// Validate persisted parameters and convert them to synthesis parameters.
pub fn wave_params(params: &WaveParameters) -> Result<WaveParams, ProcessingError> {
    validate_wave_parameters(params)?;
    let count = |field: &str, value: i64| {
        u32::try_from(value).map_err(|_| {
            ProcessingError::InvalidParameters(format!("{field} {value} is too large"))
        })
    };
    Ok(WaveParams::new(
        params.freq,
        count("spw", params.spw)?,
        count("periods", params.periods)?,
    ))
}

/// Produce the normalized source sequence for `spec`.
///
/// # Errors
///
/// [`ProcessingError::InvalidParameters`] for unusable synthesis parameters,
/// [`ProcessingError::Decode`] for malformed recordings.
pub fn resolve(spec: &WaveSpec) -> Result<SampleSequence, ProcessingError> {
    match spec {
        WaveSpec::Synthesized { kind, params } => Ok(synthesize(*kind, params)?),
        WaveSpec::Loaded { bytes } => wavesculpt_io::decode(bytes).map_err(ProcessingError::decode),
    }
}
