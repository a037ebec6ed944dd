//! Issue report data model.
//!
//! Two report shapes come out of the analysis stage:
//! - a single-file report (`filename`, `messages`, `errors`, `warnings`),
//!   produced once per processed file
//! - a multi-file report (`files`, `totals`), produced once per run
//!
//! `messages` is keyed by line, then by column. Fields stagelint does not
//! interpret are carried through untouched.

mod keys;
mod types;


pub use types::{Counts, FileReport, Issue, IssueKind, Messages, MultiReport, Report, Totals};
