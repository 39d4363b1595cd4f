//! Run failure taxonomy.

use thiserror::Error;
use wavesculpt_chart::{ChartKind, RenderError};
use wavesculpt_config::ValidationError;
use wavesculpt_synth::SynthError;

use crate::store::StoreError;

/// Why a project run failed.
///
/// Component errors are classified once, at the point where the
/// orchestrator calls the component. The `Display` text is what gets stored
/// on the project record.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Synthesis parameters, envelope values or the source selection are
    /// unusable.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The stored recording is not a readable PCM container.
    #[error("could not decode source audio: {0}")]
    Decode(#[source] wavesculpt_io::Error),

    /// A staging resource could not be acquired or released in budget.
    #[error("audio staging failed: {0}")]
    Resource(#[source] wavesculpt_io::Error),

    /// The chart backend failed.
    #[error("error creating {chart} visualization: {source}")]
    Render {
        /// Chart being rendered.
        chart: ChartKind,
        /// Backend error.
        #[source]
        source: RenderError,
    },

    /// The record store failed.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),
}

impl ProcessingError {
    /// Classify a codec failure on the decode path.
    pub fn decode(err: wavesculpt_io::Error) -> Self {
        ProcessingError::Decode(err)
    }

    /// Classify a codec failure on the encode path.
    pub fn resource(err: wavesculpt_io::Error) -> Self {
        ProcessingError::Resource(err)
    }

    /// Classify a backend failure for `chart`.
    pub fn render(chart: ChartKind, source: RenderError) -> Self {
        ProcessingError::Render { chart, source }
    }
}

impl From<SynthError> for ProcessingError {
    fn from(err: SynthError) -> Self {
        ProcessingError::InvalidParameters(err.to_string())
    }
}

impl From<ValidationError> for ProcessingError {
    fn from(err: ValidationError) -> Self {
        ProcessingError::InvalidParameters(err.to_string())
    }
}
