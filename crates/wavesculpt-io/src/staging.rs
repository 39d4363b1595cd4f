//! Scoped temporary files for staged encoding.
//!
//! A [`StagedFile`] is created inside a [`StagingArea`] directory and removed
//! when it is released or dropped, whichever comes first. Removal is retried
//! under a [`RetryPolicy`] because some platforms transiently refuse to
//! delete a file another handle (a virus scanner, an indexer) still has open.
//! Explicit [`StagedFile::release`] reports exhaustion as an error; the drop
//! path can only log it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::{Error, Result};

/// Bounded retry budget for staging file I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Removal attempts before giving up.
    pub attempts: u32,
    /// Base delay; attempt `n` waits `n × backoff` before the next try.
    pub backoff: Duration,
    /// Read-back attempts before giving up.
    pub read_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            backoff: Duration::from_millis(20),
            read_attempts: 3,
        }
    }
}

impl RetryPolicy {
    /// Policy that never sleeps, for tests.
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts,
            backoff: Duration::ZERO,
            read_attempts: attempts,
        }
    }

    /// Delay after the `attempt`-th failure (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt)
    }
}

/// Remove `path` with up to `policy.attempts` tries.
///
/// A path that no longer exists counts as released. Returns the number of
/// attempts used.
///
/// ```rust
/// use std::io;
/// use wavesculpt_io::{RetryPolicy, retry_release};
///
/// let mut failures = 2;
/// let used = retry_release("stage.wav".as_ref(), &RetryPolicy::immediate(5), |_| {
///     if failures > 0 {
///         failures -= 1;
///         Err(io::ErrorKind::PermissionDenied.into())
///     } else {
///         Ok(())
///     }
/// })?;
/// assert_eq!(used, 3);
/// # Ok::<(), wavesculpt_io::Error>(())
/// ```
pub fn retry_release<F>(path: &Path, policy: &RetryPolicy, mut remove: F) -> Result<u32>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match remove(path) {
            Ok(()) => return Ok(attempt),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(attempt),
            Err(source) if attempt >= attempts => {
                return Err(Error::Release {
                    path: path.to_path_buf(),
                    attempts,
                    source,
                });
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), attempt, error = %err, "staging release retry");
                thread::sleep(policy.delay(attempt));
            }
        }
    }
}

/// Read `path` with up to `policy.read_attempts` tries.
pub fn read_with_retry(path: &Path, policy: &RetryPolicy) -> Result<Vec<u8>> {
    let attempts = policy.read_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match fs::read(path) {
            Ok(bytes) => return Ok(bytes),
            Err(source) if attempt >= attempts => {
                return Err(Error::ReadBack {
                    path: path.to_path_buf(),
                    attempts,
                    source,
                });
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), attempt, error = %err, "staging read retry");
                thread::sleep(policy.delay(attempt));
            }
        }
    }
}

/// Directory holding staging files, plus the retry budget used on them.
#[derive(Debug, Clone)]
pub struct StagingArea {
    dir: PathBuf,
    policy: RetryPolicy,
}

impl StagingArea {
    /// Stage files under `dir` with the default policy.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            policy: RetryPolicy::default(),
        }
    }

    /// Stage files under `<system temp>/wavesculpt`.
    pub fn system() -> Self {
        Self::new(std::env::temp_dir().join("wavesculpt"))
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Staging directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Retry budget.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Create a fresh, uniquely named file in the staging directory.
    ///
    /// The directory is created if missing. Names never collide between
    /// concurrent callers.
    pub fn acquire(&self) -> Result<StagedFile> {
        fs::create_dir_all(&self.dir)?;
        let path = tempfile::Builder::new()
            .prefix("wavesculpt-")
            .suffix(".wav")
            .tempfile_in(&self.dir)?
            .into_temp_path()
            .keep()
            .map_err(|err| Error::Io(err.error))?;
        tracing::trace!(path = %path.display(), "staging file acquired");
        Ok(StagedFile {
            path,
            policy: self.policy,
            released: false,
        })
    }
}

/// A staging file that is removed when released or dropped.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    policy: RetryPolicy,
    released: bool,
}

impl StagedFile {
    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file contents back under the read retry budget.
    pub fn read(&self) -> Result<Vec<u8>> {
        read_with_retry(&self.path, &self.policy)
    }

    /// Remove the file, reporting retry exhaustion as [`Error::Release`].
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        retry_release(&self.path, &self.policy, |p| fs::remove_file(p)).map(|_| ())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = retry_release(&self.path, &self.policy, |p| fs::remove_file(p)) {
            tracing::warn!(error = %err, "staging file leaked");
        }
    }
}
