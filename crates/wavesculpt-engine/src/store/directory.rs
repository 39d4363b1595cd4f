//! Filesystem record store.
//!
//! ```text
//! <root>/
//!   1/
//!     project.json
//!     source.wav              (uploaded projects only)
//!     modified_<name>_1.wav
//!     final_<name>_1.png
//!     ...
//!   2/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use wavesculpt_config::EnvelopeData;

use super::{ProjectStore, StoreError};
use crate::record::{ArtifactKind, ProjectId, ProjectRecord};
use crate::state::ProcessingState;

const RECORD_FILE: &str = "project.json";
const SOURCE_FILE: &str = "source.wav";

/// One directory per project under a root directory.
///
/// Record updates are serialized through a lock so two field writes never
/// lose each other; artifact blobs are written outside it.
#[derive(Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    lock: Mutex<()>,
}

impl DirectoryStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        Ok(Self {
            root,
            lock: Mutex::new(()),
        })
    }

    /// Store root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of project `id`.
    pub fn project_dir(&self, id: ProjectId) -> PathBuf {
        self.root.join(id.to_string())
    }

    /// Path of an artifact file, whether or not it exists yet.
    pub fn artifact_path(&self, id: ProjectId, kind: ArtifactKind) -> Result<PathBuf, StoreError> {
        let record = self.snapshot(id)?;
        Ok(self.project_dir(id).join(record.artifact_file_name(kind)))
    }

    fn record_path(&self, id: ProjectId) -> PathBuf {
        self.project_dir(id).join(RECORD_FILE)
    }

    fn ids(&self) -> Result<Vec<ProjectId>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|e| StoreError::io(&self.root, e))?;
        let mut ids: Vec<ProjectId> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().join(RECORD_FILE).is_file())
            .filter_map(|entry| entry.file_name().to_str()?.parse().ok())
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn read_record(&self, id: ProjectId) -> Result<ProjectRecord, StoreError> {
        let path = self.record_path(id);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id));
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn write_record(&self, record: &ProjectRecord) -> Result<(), StoreError> {
        let path = self.record_path(record.id);
        let tmp = path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(record)?;
        fs::write(&tmp, text).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))
    }

    fn update(
        &self,
        id: ProjectId,
        f: impl FnOnce(&mut ProjectRecord),
    ) -> Result<ProjectRecord, StoreError> {
        let _guard = self.lock.lock();
        let mut record = self.read_record(id)?;
        f(&mut record);
        self.write_record(&record)?;
        Ok(record)
    }
}

impl ProjectStore for DirectoryStore {
    fn create(
        &self,
        mut record: ProjectRecord,
        source: Option<Vec<u8>>,
    ) -> Result<ProjectId, StoreError> {
        let _guard = self.lock.lock();
        let id = self.ids()?.last().copied().unwrap_or(0) + 1;
        record.id = id;

        let dir = self.project_dir(id);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        if let Some(bytes) = source {
            let path = dir.join(SOURCE_FILE);
            fs::write(&path, bytes).map_err(|e| StoreError::io(&path, e))?;
        }
        self.write_record(&record)?;
        tracing::debug!(id, dir = %dir.display(), "project created");
        Ok(id)
    }

    fn list(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.ids()?
            .into_iter()
            .map(|id| self.read_record(id))
            .collect()
    }

    fn snapshot(&self, id: ProjectId) -> Result<ProjectRecord, StoreError> {
        self.read_record(id)
    }

    fn source_bytes(&self, id: ProjectId) -> Result<Option<Vec<u8>>, StoreError> {
        // Existence check first so a missing project is NotFound, not None.
        self.read_record(id)?;
        read_optional(&self.project_dir(id).join(SOURCE_FILE))
    }

    fn set_state(&self, id: ProjectId, state: ProcessingState) -> Result<(), StoreError> {
        self.update(id, |record| record.state = state).map(|_| ())
    }

    fn put_artifact(
        &self,
        id: ProjectId,
        kind: ArtifactKind,
        bytes: Vec<u8>,
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut record = self.read_record(id)?;
        let name = record.artifact_file_name(kind);
        // Blob before record, so a listed artifact always exists on disk.
        let path = self.project_dir(id).join(&name);
        fs::write(&path, bytes).map_err(|e| StoreError::io(&path, e))?;
        record.artifacts.insert(kind, name);
        self.write_record(&record)
    }

    fn artifact(&self, id: ProjectId, kind: ArtifactKind) -> Result<Option<Vec<u8>>, StoreError> {
        let record = self.read_record(id)?;
        match record.artifacts.get(&kind) {
            Some(name) => read_optional(&self.project_dir(id).join(name)),
            None => Ok(None),
        }
    }

    fn put_envelope(&self, id: ProjectId, envelope: EnvelopeData) -> Result<(), StoreError> {
        self.update(id, |record| record.envelope_data = envelope)
            .map(|_| ())
    }
}

fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io(path, e)),
    }
}
