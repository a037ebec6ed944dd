//! Config struct definition and default implementation.

use crate::diff::DEFAULT_DIFF_FILTER;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from a stagelint YAML config file.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository checkout the staged diff is taken from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<PathBuf>,

    /// Directory holding the analyzed working copies named in reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmp_dir: Option<PathBuf>,

    /// Value passed to `git diff --diff-filter` (default: "ACM").
    #[serde(default = "default_diff_filter")]
    pub diff_filter: String,

    /// Treat warnings left on changed lines as a failure.
    pub fail_on_warnings: bool,
}

fn default_diff_filter() -> String {
    DEFAULT_DIFF_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: None,
            tmp_dir: None,
            diff_filter: default_diff_filter(),
            fail_on_warnings: false,
        }
    }
}
