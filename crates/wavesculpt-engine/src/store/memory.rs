//! In-process record store.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use wavesculpt_config::EnvelopeData;

use super::{ProjectStore, StoreError};
use crate::record::{ArtifactKind, ProjectId, ProjectRecord};
use crate::state::ProcessingState;

#[derive(Debug)]
struct Entry {
    record: ProjectRecord,
    source: Option<Vec<u8>>,
    blobs: HashMap<ArtifactKind, Vec<u8>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: ProjectId,
    entries: BTreeMap<ProjectId, Entry>,
}

/// Projects held in memory behind a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entry<T>(
        &self,
        id: ProjectId,
        f: impl FnOnce(&mut Entry) -> T,
    ) -> Result<T, StoreError> {
        let mut inner = self.inner.write();
        let entry = inner.entries.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        Ok(f(entry))
    }
}

impl ProjectStore for MemoryStore {
    fn create(
        &self,
        mut record: ProjectRecord,
        source: Option<Vec<u8>>,
    ) -> Result<ProjectId, StoreError> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        record.id = id;
        inner.entries.insert(
            id,
            Entry {
                record,
                source,
                blobs: HashMap::new(),
            },
        );
        Ok(id)
    }

    fn list(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        Ok(self
            .inner
            .read()
            .entries
            .values()
            .map(|e| e.record.clone())
            .collect())
    }

    fn snapshot(&self, id: ProjectId) -> Result<ProjectRecord, StoreError> {
        self.inner
            .read()
            .entries
            .get(&id)
            .map(|e| e.record.clone())
            .ok_or(StoreError::NotFound(id))
    }

    fn source_bytes(&self, id: ProjectId) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner
            .read()
            .entries
            .get(&id)
            .map(|e| e.source.clone())
            .ok_or(StoreError::NotFound(id))
    }

    fn set_state(&self, id: ProjectId, state: ProcessingState) -> Result<(), StoreError> {
        self.with_entry(id, |e| e.record.state = state)
    }

    fn put_artifact(
        &self,
        id: ProjectId,
        kind: ArtifactKind,
        bytes: Vec<u8>,
    ) -> Result<(), StoreError> {
        self.with_entry(id, |e| {
            let name = e.record.artifact_file_name(kind);
            e.record.artifacts.insert(kind, name);
            e.blobs.insert(kind, bytes);
        })
    }

    fn artifact(&self, id: ProjectId, kind: ArtifactKind) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner
            .read()
            .entries
            .get(&id)
            .map(|e| e.blobs.get(&kind).cloned())
            .ok_or(StoreError::NotFound(id))
    }

    fn put_envelope(&self, id: ProjectId, envelope: EnvelopeData) -> Result<(), StoreError> {
        self.with_entry(id, |e| e.record.envelope_data = envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let store = MemoryStore::new();
        let a = store.create(ProjectRecord::new("a"), None).unwrap();
        let b = store.create(ProjectRecord::new("b"), None).unwrap();
        assert_eq!((a, b), (1, 2));
        let names: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn artifacts_are_named_and_kept() {
        let store = MemoryStore::new();
        let id = store.create(ProjectRecord::new("demo"), None).unwrap();
        store
            .put_artifact(id, ArtifactKind::FinalPng, vec![1, 2, 3])
            .unwrap();
        let record = store.snapshot(id).unwrap();
        assert_eq!(
            record.artifacts.get(&ArtifactKind::FinalPng).map(String::as_str),
            Some("final_demo_1.png")
        );
        assert_eq!(
            store.artifact(id, ArtifactKind::FinalPng).unwrap(),
            Some(vec![1, 2, 3])
        );
        assert_eq!(store.artifact(id, ArtifactKind::FinalSvg).unwrap(), None);
    }

    #[test]
    fn missing_project() {
        let store = MemoryStore::new();
        assert!(matches!(store.snapshot(9), Err(StoreError::NotFound(9))));
        assert!(matches!(
            store.set_state(9, ProcessingState::Done),
            Err(StoreError::NotFound(9))
        ));
    }

    #[test]
    fn source_bytes_roundtrip() {
        let store = MemoryStore::new();
        let id = store
            .create(ProjectRecord::new("up"), Some(b"RIFF".to_vec()))
            .unwrap();
        assert_eq!(store.source_bytes(id).unwrap(), Some(b"RIFF".to_vec()));
    }
}
