//! Engine settings file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Tunables for the processing engine.
///
/// Every field has a default, so an empty or missing file is valid.
///
/// # TOML Format
///
/// ```toml
/// [render]
/// width = 1600
/// height = 300
///
/// [staging]
/// dir = "/var/tmp/wavesculpt"
/// attempts = 5
/// backoff_ms = 20
/// read_attempts = 3
///
/// [workers]
/// count = 2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Chart raster size.
    pub render: RenderSettings,
    /// Staging file location and retry budget.
    pub staging: StagingSettings,
    /// Background run pool.
    pub workers: WorkerSettings,
}

/// Chart raster size in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Raster width.
    pub width: u32,
    /// Raster height.
    pub height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 300,
        }
    }
}

/// Staging file location and retry budget for the audio encoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StagingSettings {
    /// Directory for staging files; the system temp dir when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Release attempts.
    pub attempts: u32,
    /// Base backoff between attempts, in milliseconds.
    pub backoff_ms: u64,
    /// Read-back attempts.
    pub read_attempts: u32,
}

impl Default for StagingSettings {
    fn default() -> Self {
        Self {
            dir: None,
            attempts: 5,
            backoff_ms: 20,
            read_attempts: 3,
        }
    }
}

/// Background run pool size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkerSettings {
    /// Number of worker threads.
    pub count: usize,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self { count: 2 }
    }
}

impl EngineSettings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load settings from `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save the settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        std::fs::write(path, self.to_toml()?).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }
}
