//! Error types for sample sequence construction.

use thiserror::Error;

/// Errors raised when a [`SampleSequence`](crate::SampleSequence) would
/// violate its invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A sequence must hold at least one sample.
    #[error("sample sequence is empty")]
    Empty,

    /// A sequence must play back at a positive rate.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// A replacement buffer must keep the sequence length.
    #[error("length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Length of the sequence being replaced.
        expected: usize,
        /// Length of the replacement buffer.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_display() {
        assert_eq!(SequenceError::Empty.to_string(), "sample sequence is empty");
    }

    #[test]
    fn length_mismatch_display() {
        let err = SequenceError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: expected 4 samples, got 3"
        );
    }
}
