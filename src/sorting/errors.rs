//! Error types for sort runs
//!
//! This module defines [`SortError`], which represents every way a run can
//! fail before or while a driver is recording snapshots.
//!
//! Input errors are recoverable at the boundary: no driver runs and the
//! caller shows the message. Limit errors abort the run that hit them.

use thiserror::Error;

/// Errors that can occur while normalising input or running a driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The input text contained no decimal digits
    #[error("No valid numbers were entered")]
    NoValidNumbers,

    /// The algorithm identifier is not one of the known drivers
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    /// Bogo sort gave up after the configured number of shuffles
    #[error("Gave up after {limit} shuffles without reaching sorted order")]
    ShuffleLimitExceeded { limit: usize },

    /// Snapshot history grew past the configured memory limit
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// A snapshot highlighted a position outside the array
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SortError {
    /// Whether this error was caused by the caller's input rather than by
    /// a resource limit
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SortError::NoValidNumbers | SortError::UnknownAlgorithm { .. }
        )
    }
}
