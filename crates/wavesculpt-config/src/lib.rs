//! Configuration and persisted shapes for wavesculpt.
//!
//! This crate holds every serializable type that crosses the boundary
//! between the processing engine and whatever stores its projects.
//!
//! # Features
//!
//! - **Project fields**: [`WaveParameters`], [`EnvelopeData`] and [`SourceKind`]
//!   in the JSON shapes a project record persists
//! - **Colors**: [`Rgb`], [`ColorScheme`] and the named [`palette`]
//! - **Settings**: [`EngineSettings`] loaded from TOML
//! - **Validation**: field checks applied before a run starts
//! - **Paths**: Platform-specific settings location
//!
//! # Example
//!
//! ```rust
//! use wavesculpt_config::{EnvelopeData, WaveParameters};
//!
//! let params: WaveParameters = serde_json::from_str(r#"{"freq": 220.0}"#).unwrap();
//! assert_eq!((params.freq, params.spw, params.periods), (220.0, 100, 10));
//!
//! let env: EnvelopeData = serde_json::from_str(r#"{"positive": [0.5]}"#).unwrap();
//! assert!(env.negative.is_empty());
//! ```

mod colors;
mod error;
mod project;
mod settings;

/// Platform-specific paths for settings.
pub mod paths;

/// Field validation for project inputs.
pub mod validation;

pub use colors::{ColorScheme, NamedColor, ParseColorError, Rgb, lookup_color, palette};
pub use error::ConfigError;
pub use paths::{default_settings_path, user_config_dir};
pub use project::{EnvelopeData, SourceKind, WaveParameters};
pub use settings::{EngineSettings, RenderSettings, StagingSettings, WorkerSettings};
pub use validation::{
    ValidationError, ValidationResult, validate_color, validate_envelope,
    validate_wave_parameters,
};
