//! Project record stores.
//!
//! The orchestrator reads a snapshot of a project at the start of a run and
//! writes results back one field at a time. Writes from concurrent runs on
//! the same project interleave; the last write to each field wins.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;
use wavesculpt_config::EnvelopeData;

use crate::record::{ArtifactKind, ProjectId, ProjectRecord};
use crate::state::ProcessingState;

/// Record store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No project with this id.
    #[error("project {0} not found")]
    NotFound(ProjectId),

    /// Filesystem failure.
    #[error("failed to access '{path}': {source}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored record could not be parsed or written.
    #[error("corrupt project record: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Persistence the engine needs from its collaborator.
///
/// Implementations are shared across worker threads.
pub trait ProjectStore: Send + Sync {
    /// Insert a new project, assigning its id. `source` holds the uploaded
    /// recording, if any.
    fn create(
        &self,
        record: ProjectRecord,
        source: Option<Vec<u8>>,
    ) -> Result<ProjectId, StoreError>;

    /// All projects, ordered by id.
    fn list(&self) -> Result<Vec<ProjectRecord>, StoreError>;

    /// Current copy of a project.
    fn snapshot(&self, id: ProjectId) -> Result<ProjectRecord, StoreError>;

    /// Uploaded recording bytes, if the project has one.
    fn source_bytes(&self, id: ProjectId) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the processing state.
    fn set_state(&self, id: ProjectId, state: ProcessingState) -> Result<(), StoreError>;

    /// Store one artifact blob, replacing any previous one of the same kind.
    fn put_artifact(
        &self,
        id: ProjectId,
        kind: ArtifactKind,
        bytes: Vec<u8>,
    ) -> Result<(), StoreError>;

    /// Read back an artifact blob.
    fn artifact(&self, id: ProjectId, kind: ArtifactKind) -> Result<Option<Vec<u8>>, StoreError>;

    /// Persist the curves a run applied.
    fn put_envelope(&self, id: ProjectId, envelope: EnvelopeData) -> Result<(), StoreError>;
}
