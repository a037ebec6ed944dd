//! Exit code constants for the stagelint CLI.
//!
//! - 0: Success (no findings left on changed lines)
//! - 1: User error (bad configuration, unreadable report)
//! - 2: Findings remain on changed lines
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or invalid configuration, malformed report input.
pub const USER_ERROR: i32 = 1;

/// The filtered report still contains findings on changed lines.
pub const FINDINGS: i32 = 2;

/// Git operation failure: the staged diff could not be retrieved.
pub const GIT_FAILURE: i32 = 3;
