//! Editor seed data for a project.

use serde::Serialize;

use crate::error::ProcessingError;
use crate::record::ProjectId;
use crate::source::{WaveSpec, resolve};
use crate::store::ProjectStore;

/// Original samples plus the stored curves, each curve exactly as long as
/// the audio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioView {
    /// Resolved, normalized source samples.
    pub audio_data: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Stored positive curve, or zeros.
    pub envelope_pos: Vec<f32>,
    /// Stored negative curve, or zeros.
    pub envelope_neg: Vec<f32>,
    /// Number of samples.
    pub length: usize,
}

/// Resolve project `id` and pair it with its stored curves.
///
/// A stored curve of the wrong length (including a never-run project's
/// empty curves) is replaced by zeros.
pub fn audio_view(store: &dyn ProjectStore, id: ProjectId) -> Result<AudioView, ProcessingError> {
    let record = store.snapshot(id)?;
    let source = if record.source.is_synthesized() {
        None
    } else {
        store.source_bytes(id)?
    };
    let spec = WaveSpec::from_record(record.source, &record.wave_parameters, source)?;
    let (audio_data, sample_rate) = resolve(&spec)?.into_parts();
    let length = audio_data.len();

    let fit = |curve: Vec<f32>| {
        if curve.len() == length {
            curve
        } else {
            vec![0.0; length]
        }
    };
    let envelope = record.envelope_data;
    Ok(AudioView {
        envelope_pos: fit(envelope.positive),
        envelope_neg: fit(envelope.negative),
        audio_data,
        sample_rate,
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProjectRecord;
    use crate::store::MemoryStore;
    use wavesculpt_config::{EnvelopeData, WaveParameters};

    #[test]
    fn fresh_project_gets_zero_curves() {
        let store = MemoryStore::new();
        let id = store
            .create(
                ProjectRecord::new("v").with_wave_parameters(WaveParameters::new(100.0, 8, 2)),
                None,
            )
            .unwrap();
        let view = audio_view(&store, id).unwrap();
        assert_eq!(view.length, 16);
        assert_eq!(view.sample_rate, 800);
        assert_eq!(view.envelope_pos, vec![0.0; 16]);
        assert_eq!(view.envelope_neg, vec![0.0; 16]);
    }

    #[test]
    fn matching_curves_are_kept_and_mismatched_reset() {
        let store = MemoryStore::new();
        let id = store
            .create(
                ProjectRecord::new("v").with_wave_parameters(WaveParameters::new(100.0, 4, 1)),
                None,
            )
            .unwrap();
        store
            .put_envelope(id, EnvelopeData::new(vec![0.1, 0.2, 0.3, 0.4], vec![0.5]))
            .unwrap();
        let view = audio_view(&store, id).unwrap();
        assert_eq!(view.envelope_pos, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(view.envelope_neg, vec![0.0; 4]);
    }

    #[test]
    fn json_field_names() {
        let view = AudioView {
            audio_data: vec![1.0],
            sample_rate: 10,
            envelope_pos: vec![0.0],
            envelope_neg: vec![0.0],
            length: 1,
        };
        let json = serde_json::to_value(&view).unwrap();
        for key in ["audio_data", "sample_rate", "envelope_pos", "envelope_neg", "length"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
