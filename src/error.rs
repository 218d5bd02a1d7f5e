//! Error types
//!
//! Trace generation itself never fails: degenerate input and search misses
//! are ordinary traces. What can fail is everything around it:
//! - [`RegistryError`]: an algorithm id with no generator, or a search without a target
//! - [`PlaybackError`]: moving the cursor past either end of a trace
//! - [`InputError`]: a command-line array that is not a list of numbers

use crate::algorithms::AlgorithmId;
use thiserror::Error;

/// Mismatch between a requested algorithm and the generator set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No generator is registered under this id
    #[error("unknown algorithm '{id}' (expected one of: {expected})")]
    UnknownAlgorithm { id: String, expected: String },

    /// Binary search was selected but no target was supplied
    #[error("{algorithm} needs a target value")]
    MissingTarget { algorithm: AlgorithmId },
}

/// Cursor movement outside the recorded trace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Already on the first frame
    #[error("already at the beginning of the trace")]
    AtStart,

    /// Already on the last frame
    #[error("no more frames available (algorithm finished)")]
    AtEnd,

    /// Seek target does not exist
    #[error("frame {index} out of range for a trace of {len} frames")]
    OutOfRange { index: usize, len: usize },
}

/// Malformed array text on the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{token}' is not a number")]
    NotANumber { token: String },

    #[error("'{token}' is not a finite number")]
    NotFinite { token: String },
}
