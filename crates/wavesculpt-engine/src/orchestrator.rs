//! Project runs.
//!
//! A run resolves the project's source, applies the envelope, encodes the
//! edited audio, renders the three charts, stores the applied curves and
//! marks the project done. Each artifact is written as soon as it exists, so
//! a run that fails part-way leaves the artifacts it already wrote in place.
//! The project ends up `Failed` with the error text, and nothing is rolled
//! back.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use wavesculpt_chart::{ChartInputs, ChartRenderer, PlotRenderer};
use wavesculpt_config::{EngineSettings, EnvelopeData, validate_envelope};
use wavesculpt_core::{EnvelopePair, SampleSequence};
use wavesculpt_io::{PcmCodec, RetryPolicy, StagingArea};

use crate::error::ProcessingError;
use crate::record::{ArtifactKind, ProjectId};
use crate::source::{WaveSpec, resolve};
use crate::state::ProcessingState;
use crate::store::ProjectStore;

/// Message reported for a run that completed.
pub const SUCCESS_MESSAGE: &str = "Processing completed successfully";

/// Result of one run, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Whether the project reached `Done`.
    pub success: bool,
    /// Success text, or the stored failure message.
    pub message: String,
}

impl RunOutcome {
    fn done() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Edited audio and the curves that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    /// Audio after substitution.
    pub modified: SampleSequence,
    /// Curves fitted to the audio length.
    pub envelope: EnvelopePair,
}

/// Apply an optional curve override to `original`.
///
/// Without an override the audio is left as is and the applied curves are
/// all zero, which is what a fresh project persists.
pub fn edit(
    original: &SampleSequence,
    envelope: Option<&EnvelopeData>,
) -> Result<Edit, ProcessingError> {
    let len = original.len();
    match envelope {
        Some(data) => {
            validate_envelope(data)?;
            let pair =
                EnvelopePair::new(data.positive.as_slice(), data.negative.as_slice()).fit(len);
            Ok(Edit {
                modified: pair.apply(original),
                envelope: pair,
            })
        }
        None => Ok(Edit {
            modified: original.clone(),
            envelope: EnvelopePair::zeros(len),
        }),
    }
}

/// Runs projects against a renderer and an audio codec.
///
/// Holds no per-run state; one processor is shared by every worker.
#[derive(Clone)]
pub struct Processor {
    renderer: Arc<dyn ChartRenderer>,
    codec: PcmCodec,
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl Processor {
    /// Processor with an explicit backend and codec.
    pub fn new(renderer: Arc<dyn ChartRenderer>, codec: PcmCodec) -> Self {
        Self { renderer, codec }
    }

    /// Reference backend at the configured size, staged encoder with the
    /// configured retry budget.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let staging = &settings.staging;
        let area = match &staging.dir {
            Some(dir) => StagingArea::new(dir),
            None => StagingArea::system(),
        }
        .with_policy(RetryPolicy {
            attempts: staging.attempts.max(1),
            backoff: Duration::from_millis(staging.backoff_ms),
            read_attempts: staging.read_attempts.max(1),
        });
        let renderer = PlotRenderer::new(settings.render.width, settings.render.height);
        Self::new(Arc::new(renderer), PcmCodec::staged(area))
    }

    /// The audio codec.
    pub fn codec(&self) -> &PcmCodec {
        &self.codec
    }

    /// Run project `id`, optionally with new curves.
    ///
    /// Never panics or returns early on failure: every error becomes a
    /// `Failed` state on the record and a `success: false` outcome.
    pub fn run_project(
        &self,
        store: &dyn ProjectStore,
        id: ProjectId,
        envelope: Option<EnvelopeData>,
    ) -> RunOutcome {
        tracing::info!(project = id, override_curves = envelope.is_some(), "run started");
        match self.execute(store, id, envelope) {
            Ok(()) => {
                tracing::info!(project = id, "run finished");
                RunOutcome::done()
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(project = id, error = %message, "run failed");
                if let Err(store_err) =
                    store.set_state(id, ProcessingState::Failed(message.clone()))
                {
                    tracing::warn!(project = id, error = %store_err, "could not record failure");
                }
                RunOutcome::failed(message)
            }
        }
    }

    fn execute(
        &self,
        store: &dyn ProjectStore,
        id: ProjectId,
        envelope: Option<EnvelopeData>,
    ) -> Result<(), ProcessingError> {
        store.set_state(id, ProcessingState::Processing)?;
        let record = store.snapshot(id)?;

        let source = if record.source.is_synthesized() {
            None
        } else {
            store.source_bytes(id)?
        };
        let spec = WaveSpec::from_record(record.source, &record.wave_parameters, source)?;
        let original = resolve(&spec)?;
        tracing::debug!(
            project = id,
            samples = original.len(),
            sample_rate = original.sample_rate(),
            "source resolved"
        );

        let Edit { modified, envelope } = edit(&original, envelope.as_ref())?;

        let audio = self
            .codec
            .encode(&modified)
            .map_err(ProcessingError::resource)?;
        store.put_artifact(id, ArtifactKind::ModifiedAudio, audio)?;

        let inputs = ChartInputs {
            original: &original,
            modified: &modified,
            envelope: &envelope,
            colors: &record.colors,
        };
        for spec in inputs.all() {
            let rendered = self
                .renderer
                .render(&spec)
                .map_err(|err| ProcessingError::render(spec.kind, err))?;
            let (png, svg) = ArtifactKind::for_chart(spec.kind);
            store.put_artifact(id, png, rendered.png)?;
            store.put_artifact(id, svg, rendered.svg)?;
            tracing::debug!(project = id, chart = %spec.kind, "chart stored");
        }

        let EnvelopePair { positive, negative } = envelope;
        store.put_envelope(
            id,
            EnvelopeData::new(positive.into_values(), negative.into_values()),
        )?;
        store.set_state(id, ProcessingState::Done)?;
        Ok(())
    }
}
