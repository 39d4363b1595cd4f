//! Settings and curve-document errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Anything that can go wrong loading, saving or checking settings and
/// envelope documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A settings or curve file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        /// File that was being read.
        path: PathBuf,
        /// Cause.
        #[source]
        source: io::Error,
    },

    /// Saving a settings file failed.
    #[error("cannot write {}: {source}", path.display())]
    WriteFile {
        /// File that was being written.
        path: PathBuf,
        /// Cause.
        #[source]
        source: io::Error,
    },

    /// The parent of a settings file could not be created.
    #[error("cannot create {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Cause.
        #[source]
        source: io::Error,
    },

    /// Settings text is not valid TOML or has the wrong shape.
    #[error("malformed settings: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Settings could not be rendered as TOML.
    #[error("settings not representable as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A curve document is not valid JSON or has the wrong shape.
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    /// Wrap a read failure for `path`.
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Wrap a write failure for `path`.
    pub fn write_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Wrap a directory creation failure for `path`.
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// The file involved, for I/O failures.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ReadFile { path, .. }
            | Self::WriteFile { path, .. }
            | Self::CreateDir { path, .. } => Some(path),
            _ => None,
        }
    }
}
