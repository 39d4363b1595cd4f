//! Wavesculpt Engine - project runs over a record store
//!
//! This crate ties the numeric crates together into the unit of work a
//! front end triggers: resolve a project's audio, apply its envelope, write
//! the edited audio and the three charts back to the record store, and track
//! the result in a small state machine.
//!
//! # Pieces
//!
//! - [`resolve`] / [`WaveSpec`] - synthesized or decoded source audio
//! - [`Processor::run_project`] - one run, with failures captured on the record
//! - [`ProcessingState`] - `idle`, `processing`, `done`, `failed`
//! - [`ProjectStore`] - what the engine needs from persistence, with
//!   [`MemoryStore`] and [`DirectoryStore`] implementations
//! - [`Dispatcher`] - background workers fed from a job queue
//! - [`audio_view`] - samples and stored curves for an interactive editor
//!
//! # Example
//!
//! ```rust
//! use wavesculpt_engine::{MemoryStore, ProcessingState, Processor, ProjectRecord, ProjectStore};
//!
//! let store = MemoryStore::new();
//! let id = store.create(ProjectRecord::new("demo"), None).unwrap();
//!
//! let outcome = Processor::default().run_project(&store, id, None);
//! assert!(outcome.success);
//! assert_eq!(store.snapshot(id).unwrap().state, ProcessingState::Done);
//! ```

pub mod dispatch;
pub mod error;
pub mod orchestrator;
pub mod record;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

pub use dispatch::{DispatchError, Dispatcher};
pub use error::ProcessingError;
pub use orchestrator::{Edit, Processor, RunOutcome, SUCCESS_MESSAGE, edit};
pub use record::{ArtifactKind, ProjectId, ProjectRecord};
pub use source::{WaveSpec, resolve, wave_params, waveform_for};
pub use state::ProcessingState;
pub use store::{DirectoryStore, MemoryStore, ProjectStore, StoreError};
pub use view::{AudioView, audio_view};
