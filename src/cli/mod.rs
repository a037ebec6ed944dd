//! CLI argument parsing for stagelint.
//!
//! Uses clap derive macros for declarative argument definitions. Command
//! implementations live in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use stagelint::config::{SRC_DIR_ENV, TMP_DIR_ENV};
use std::path::PathBuf;

/// stagelint: keep only the static-analysis issues on staged lines.
///
/// Reads an issue report (JSON), takes the staged diff of the source
/// repository, and writes the report restricted to the lines the diff adds,
/// with error and warning totals recomputed.
#[derive(Parser, Debug)]
#[command(name = "stagelint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Source repository root (where `git diff --staged` runs).
    #[arg(long, global = true, env = SRC_DIR_ENV, value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// Temporary root holding the analyzed copies named in the report.
    #[arg(long, global = true, env = TMP_DIR_ENV, value_name = "DIR")]
    pub tmp_dir: Option<PathBuf>,

    /// YAML config file supplying defaults.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands for stagelint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter an issue report down to staged lines.
    ///
    /// Exits with status 2 when errors remain on changed lines (or warnings,
    /// with --fail-on-warnings).
    Filter(FilterArgs),

    /// Print the added lines of the staged diff as JSON.
    Changes(ChangesArgs),
}

/// Arguments for the `filter` command.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Report JSON file (`-` or omitted reads stdin).
    #[arg(long, short, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Read the diff from a file instead of running git.
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Write the filtered report here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Value for `git diff --diff-filter` (overrides the config file).
    #[arg(long, value_name = "LETTERS")]
    pub diff_filter: Option<String>,

    /// Fail when warnings remain on changed lines.
    #[arg(long)]
    pub fail_on_warnings: bool,
}

/// Arguments for the `changes` command.
#[derive(Args, Debug, Default)]
pub struct ChangesArgs {
    /// Read the diff from a file instead of running git.
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Value for `git diff --diff-filter` (overrides the config file).
    #[arg(long, value_name = "LETTERS")]
    pub diff_filter: Option<String>,
}
