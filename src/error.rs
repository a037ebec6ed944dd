//! Error types for stagelint.
//!
//! Only configuration, diff retrieval and input handling can fail. The
//! filtering core itself is total over well-formed reports.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stagelint operations.
#[derive(Error, Debug)]
pub enum LintError {
    /// A workspace root is missing or does not resolve to a directory.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The staged diff could not be retrieved.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The issue report could not be parsed or has an unknown shape.
    #[error("Invalid report: {0}")]
    ReportError(String),

    /// Reading or writing an input/output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::ConfigError(_) => exit_codes::USER_ERROR,
            LintError::GitError(_) => exit_codes::GIT_FAILURE,
            LintError::ReportError(_) => exit_codes::USER_ERROR,
            LintError::Io(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for stagelint operations.
pub type Result<T> = std::result::Result<T, LintError>;
