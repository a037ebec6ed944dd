//! Command implementations for stagelint.
//!
//! Each handler returns the process exit code on success; fatal errors are
//! returned as [`LintError`](stagelint::error::LintError) and mapped to an
//! exit code by `main`.

mod changes;
mod filter;
mod io;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command, GlobalArgs};
use stagelint::config::Config;
use stagelint::diff::{ChangeMap, parse_changes, staged_changes};
use stagelint::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Filter(args) => filter::cmd_filter(&cli.global, args),
        Command::Changes(args) => changes::cmd_changes(&cli.global, args),
    }
}

/// Load the `--config` file, or defaults when none is given.
fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Build the change map from a diff file, or from the staged diff of `src_root`.
fn load_changes(diff_file: Option<&Path>, src_root: &Path, diff_filter: &str) -> Result<ChangeMap> {
    match diff_file {
        Some(path) => Ok(parse_changes(&io::read_input(Some(path))?)),
        None => staged_changes(src_root, diff_filter),
    }
}
