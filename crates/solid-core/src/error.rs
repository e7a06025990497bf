//! Error types for Solid core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for Solid operations.
pub type Result<T> = std::result::Result<T, SolidError>;

/// Core error type for Solid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolidError {
    /// Sequence number is zero or was never issued
    #[error("index out of bounds: sequence {sequence} is outside 1..={highest}")]
    OutOfRange { sequence: u64, highest: u64 },

    /// Sequence number was issued but names no live entry in this journal
    #[error("no entry with sequence {0}")]
    EntryNotFound(u64),
}
