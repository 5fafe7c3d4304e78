//! Error types shared by disks and array layouts.

use thiserror::Error;

/// Result type used throughout the RAID core.
pub type Result<T> = std::result::Result<T, Error>;

/// Error enumerates the ways a disk or array operation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The write operand is not exactly one block long. Raised before any
    /// disk is touched.
    #[error("block size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The backing storage failed. Passed through from the I/O layer
    /// unchanged; there is no retry.
    #[error("disk I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A contract operation was attempted before `initialize`, or after
    /// `clean_up` released the disks.
    #[error("array is not initialized")]
    NotInitialized,
}
