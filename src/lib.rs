//! stagelint: restrict static-analysis reports to staged changes.
//!
//! A pre-commit check should only complain about code the commit touches.
//! stagelint parses the staged unified diff into a [`diff::ChangeMap`] of
//! added lines per file, then projects an issue report onto those lines and
//! recomputes its error and warning totals.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod git;
pub mod report;

#[cfg(test)]
mod test_support;

pub use diff::{ChangeMap, parse_changes};
pub use error::{LintError, Result};
pub use filter::ReportFilter;
pub use report::{FileReport, Issue, IssueKind, MultiReport, Report};
