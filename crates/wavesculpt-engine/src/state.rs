//! Project processing state machine.
//!
//! ```text
//!          run               ok
//!   Idle ───────▶ Processing ───▶ Done
//!                  ▲   │  err       │
//!                  │   └──────▶ Failed(msg)
//!                  └──── run ───────┘ (from Done or Failed)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a project stands with respect to its most recent run.
///
/// Serialized as `{"status": "failed", "message": "..."}`; the message is
/// absent for the other states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum ProcessingState {
    /// Never run.
    #[default]
    Idle,
    /// A run has been triggered and not yet finished.
    Processing,
    /// The last run completed.
    Done,
    /// The last run failed with this message.
    Failed(String),
}

impl ProcessingState {
    /// True while a run is in flight.
    pub fn is_processing(&self) -> bool {
        matches!(self, ProcessingState::Processing)
    }

    /// Stored error text; empty unless `Failed`.
    pub fn error_message(&self) -> &str {
        match self {
            ProcessingState::Failed(message) => message,
            _ => "",
        }
    }

    /// Lowercase state name.
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingState::Idle => "idle",
            ProcessingState::Processing => "processing",
            ProcessingState::Done => "done",
            ProcessingState::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for ProcessingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingState::Failed(message) => write!(f, "failed: {message}"),
            other => f.write_str(other.name()),
        }
    }
}
