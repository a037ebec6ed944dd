//! Staged diff retrieval.

use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

use super::ChangeMap;
use super::parser::parse_changes;

/// Diff filter selecting added, copied and modified files.
///
/// Deleted files have no lines to report on, so they are left out.
pub const DEFAULT_DIFF_FILTER: &str = "ACM";

/// Fetch the staged diff of the repository at `src_root`.
///
/// Runs `git diff --staged --diff-filter=<diff_filter>` with `src_root` as
/// the working directory.
///
/// # Returns
///
/// * `Ok(String)` - Raw unified diff text (may be empty)
/// * `Err(LintError::GitError)` - git exited non-zero
pub fn staged_diff<P: AsRef<Path>>(src_root: P, diff_filter: &str) -> Result<String> {
    let filter_arg = format!("--diff-filter={}", diff_filter);
    let output = run_git(
        &src_root,
        &["diff", "--staged", "--no-color", "--no-ext-diff", &filter_arg],
    )?;

    if output.is_empty() {
        log::info!("no staged changes in {}", src_root.as_ref().display());
    }

    Ok(output.stdout)
}

/// Fetch the staged diff of `src_root` and parse it into a [`ChangeMap`].
pub fn staged_changes<P: AsRef<Path>>(src_root: P, diff_filter: &str) -> Result<ChangeMap> {
    let diff = staged_diff(src_root, diff_filter)?;
    Ok(parse_changes(&diff))
}
