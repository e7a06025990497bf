//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Sequence number was issued but names no live entry.
    pub const NOT_FOUND: i32 = 3;

    /// Sequence number is zero or was never issued.
    pub const OUT_OF_RANGE: i32 = 4;
}
