//! Background run submission.
//!
//! Submitted runs go onto one queue drained by a fixed set of worker
//! threads. Runs for the same project are not serialized: two submissions
//! for one id may execute at once, and their final state and artifact
//! writes race, with the last writer winning. Callers that need one run per
//! project at a time must enforce that themselves.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use thiserror::Error;
use wavesculpt_config::EnvelopeData;

use crate::orchestrator::{Processor, RunOutcome};
use crate::record::ProjectId;
use crate::state::ProcessingState;
use crate::store::{ProjectStore, StoreError};

/// Submission failures.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The project could not be marked as processing.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The worker pool has shut down.
    #[error("dispatcher is shut down")]
    Closed,
}

struct Job {
    id: ProjectId,
    envelope: Option<EnvelopeData>,
    reply: Sender<RunOutcome>,
}

/// Fixed pool of run workers over a shared store.
pub struct Dispatcher {
    store: Arc<dyn ProjectStore>,
    jobs: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("workers", &self.workers.len())
            .field("open", &self.jobs.is_some())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Start `workers` threads (at least one) running projects from `store`.
    pub fn new(processor: Processor, store: Arc<dyn ProjectStore>, workers: usize) -> Self {
        let (tx, rx) = unbounded::<Job>();
        let workers = (0..workers.max(1))
            .map(|index| {
                let rx = rx.clone();
                let processor = processor.clone();
                let store = Arc::clone(&store);
                thread::Builder::new()
                    .name(format!("wavesculpt-worker-{index}"))
                    .spawn(move || worker_loop(&processor, store.as_ref(), &rx))
            })
            .filter_map(|spawned| match spawned {
                Ok(handle) => Some(handle),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to spawn worker");
                    None
                }
            })
            .collect();
        Self {
            store,
            jobs: Some(tx),
            workers,
        }
    }

    /// Number of live worker threads.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Mark project `id` as processing and queue a run for it.
    ///
    /// The returned receiver yields exactly one [`RunOutcome`].
    pub fn submit(
        &self,
        id: ProjectId,
        envelope: Option<EnvelopeData>,
    ) -> Result<Receiver<RunOutcome>, DispatchError> {
        let jobs = self.jobs.as_ref().ok_or(DispatchError::Closed)?;
        if self.workers.is_empty() {
            return Err(DispatchError::Closed);
        }
        self.store.set_state(id, ProcessingState::Processing)?;
        let (reply, outcome) = bounded(1);
        jobs.send(Job {
            id,
            envelope,
            reply,
        })
        .map_err(|_| DispatchError::Closed)?;
        tracing::debug!(project = id, "run queued");
        Ok(outcome)
    }

    /// Stop accepting work, finish queued runs and join the workers.
    pub fn shutdown(&mut self) {
        self.jobs.take();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                tracing::warn!("worker panicked");
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(processor: &Processor, store: &dyn ProjectStore, jobs: &Receiver<Job>) {
    while let Ok(job) = jobs.recv() {
        let outcome = processor.run_project(store, job.id, job.envelope);
        // The submitter may have dropped its receiver.
        let _ = job.reply.send(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProjectRecord;
    use crate::store::MemoryStore;
    use wavesculpt_io::PcmCodec;

    fn processor() -> Processor {
        Processor::new(
            Arc::new(wavesculpt_chart::PlotRenderer::new(64, 16)),
            PcmCodec::in_memory(),
        )
    }

    #[test]
    fn submit_marks_processing_and_replies() {
        let store: Arc<dyn ProjectStore> = Arc::new(MemoryStore::new());
        let id = store.create(ProjectRecord::new("d"), None).unwrap();
        let dispatcher = Dispatcher::new(processor(), Arc::clone(&store), 1);
        let outcome = dispatcher.submit(id, None).unwrap().recv().unwrap();
        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(store.snapshot(id).unwrap().state, ProcessingState::Done);
    }

    #[test]
    fn unknown_project_is_rejected_before_queueing() {
        let store: Arc<dyn ProjectStore> = Arc::new(MemoryStore::new());
        let dispatcher = Dispatcher::new(processor(), store, 1);
        assert!(matches!(
            dispatcher.submit(5, None),
            Err(DispatchError::Store(StoreError::NotFound(5)))
        ));
    }

    #[test]
    fn closed_after_shutdown() {
        let store: Arc<dyn ProjectStore> = Arc::new(MemoryStore::new());
        let id = store.create(ProjectRecord::new("d"), None).unwrap();
        let mut dispatcher = Dispatcher::new(processor(), store, 2);
        assert_eq!(dispatcher.worker_count(), 2);
        dispatcher.shutdown();
        assert!(matches!(dispatcher.submit(id, None), Err(DispatchError::Closed)));
    }
}
