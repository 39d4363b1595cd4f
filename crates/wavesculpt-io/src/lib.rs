//! PCM codec layer for wavesculpt.
//!
//! This crate provides:
//!
//! - **WAV codec**: [`encode`] and [`decode`] between [`SampleSequence`] and
//!   16-bit mono PCM WAV bytes
//! - **Staged encoding**: [`PcmCodec`] writes through a scoped temporary file
//!   in a [`StagingArea`], released with bounded retry on every exit path
//! - **Metadata**: [`wav_info`] and [`read_wav_info`] without decoding samples
//!
//! ## Quick Start
//!
//! ```rust
//! use wavesculpt_core::SampleSequence;
//! use wavesculpt_io::{decode, encode};
//!
//! let seq = SampleSequence::new(vec![0.0, 1.0, -1.0, 0.5], 8000)?;
//! let bytes = encode(&seq)?;
//! let back = decode(&bytes)?;
//! assert_eq!(back.sample_rate(), 8000);
//! assert_eq!(back.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod staging;
mod wav;

pub use staging::{RetryPolicy, StagedFile, StagingArea, read_with_retry, retry_release};
pub use wav::{
    PCM_SCALE, PcmCodec, WavFormat, WavInfo, decode, decode_file, encode, quantize,
    read_wav_info, wav_info, write_wav,
};

pub use wavesculpt_core::SampleSequence;

use std::path::PathBuf;

/// Error types for codec and staging operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV container read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The container decoded to zero samples.
    #[error("audio contains no samples")]
    EmptyAudio,

    /// Decoded samples violated a sequence invariant.
    #[error("invalid audio: {0}")]
    Sequence(#[from] wavesculpt_core::SequenceError),

    /// A staging file could not be removed within the retry budget.
    #[error("could not release staging file {} after {attempts} attempts: {source}", path.display())]
    Release {
        /// Staging file path.
        path: PathBuf,
        /// Attempts made.
        attempts: u32,
        /// Last failure.
        #[source]
        source: std::io::Error,
    },

    /// A staging file could not be read back within the retry budget.
    #[error("could not read staging file {} after {attempts} attempts: {source}", path.display())]
    ReadBack {
        /// Staging file path.
        path: PathBuf,
        /// Attempts made.
        attempts: u32,
        /// Last failure.
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures of the staging resource rather than of the audio data.
    pub fn is_resource(&self) -> bool {
        matches!(
            self,
            Error::Release { .. } | Error::ReadBack { .. } | Error::Io(_)
        )
    }
}

/// Convenience result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
