//! `stagelint changes`: show what the diff parser sees.

use super::io::write_output;
use super::{load_changes, load_config};
use crate::cli::{ChangesArgs, GlobalArgs};
use stagelint::config::{SRC_DIR_ENV, Workspace, validate_diff_filter};
use stagelint::error::{LintError, Result};
use stagelint::exit_codes;
use std::path::PathBuf;

pub(super) fn cmd_changes(global: &GlobalArgs, args: ChangesArgs) -> Result<i32> {
    let config = load_config(global)?;
    let diff_filter = args
        .diff_filter
        .unwrap_or_else(|| config.diff_filter.clone());
    validate_diff_filter(&diff_filter)?;

    // Only the source root matters here, and only when git is consulted.
    let src_root = match &args.diff {
        Some(_) => PathBuf::new(),
        None => Workspace::pick_root(
            SRC_DIR_ENV,
            global.src_dir.as_deref(),
            config.src_dir.as_deref(),
        )?,
    };

    let changes = load_changes(args.diff.as_deref(), &src_root, &diff_filter)?;
    let json = serde_json::to_string_pretty(&changes)
        .map_err(|e| LintError::ReportError(format!("failed to serialize changes: {}", e)))?;
    write_output(None, &json)?;

    Ok(exit_codes::SUCCESS)
}
