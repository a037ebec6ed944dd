//! Unified diff parsing for stagelint.
//!
//! Turns the text of `git diff --staged` into a [`ChangeMap`]: for every
//! file in the new tree, the 1-based line numbers that the diff adds.
//!
//! The parser is a single pass over the diff lines and only interprets:
//! - `+++ <prefix>/<path>` new-file headers
//! - `@@ -a,b +c,d @@` hunk headers
//! - `+` added lines, ` ` context lines and `-` removed lines

mod api;
mod helpers;
mod parser;


use std::collections::BTreeMap;

/// Mapping from repository-relative path to the added line numbers of that
/// path, in the order the diff lists them (strictly increasing).
pub type ChangeMap = BTreeMap<String, Vec<u32>>;

pub use api::{DEFAULT_DIFF_FILTER, staged_changes, staged_diff};
pub use parser::parse_changes;
