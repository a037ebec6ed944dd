//! Configuration for stagelint.
//!
//! Two kinds of settings exist:
//! - [`Config`]: optional YAML file with defaults for the workspace roots,
//!   the git diff filter and the failure policy
//! - [`Workspace`]: the resolved source and temporary roots, validated to be
//!   existing directories before any diff is fetched

mod model;
mod operations;
mod workspace;


pub use model::Config;
pub use operations::validate_diff_filter;
pub use workspace::{SRC_DIR_ENV, TMP_DIR_ENV, Workspace};
