//! Workspace roots.

use super::model::Config;
use crate::error::{LintError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the source root.
pub const SRC_DIR_ENV: &str = "STAGELINT_SRC_DIR";

/// Environment variable naming the temporary root.
pub const TMP_DIR_ENV: &str = "STAGELINT_TMP_DIR";

/// The two directories a filtering run works with.
///
/// Both paths are canonical and known to be directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Version-controlled checkout; `git diff` runs here.
    pub src_root: PathBuf,
    /// Where the analysis tool wrote the working copies named in reports.
    pub tmp_root: PathBuf,
}

impl Workspace {
    /// Validate and canonicalize both roots.
    ///
    /// # Returns
    ///
    /// * `Ok(Workspace)` - Both roots are existing directories
    /// * `Err(LintError::ConfigError)` - A root is missing or not a directory
    pub fn new<S: AsRef<Path>, T: AsRef<Path>>(src_root: S, tmp_root: T) -> Result<Self> {
        Ok(Self {
            src_root: resolve_dir(SRC_DIR_ENV, src_root.as_ref())?,
            tmp_root: resolve_dir(TMP_DIR_ENV, tmp_root.as_ref())?,
        })
    }

    /// Read both roots from `STAGELINT_SRC_DIR` and `STAGELINT_TMP_DIR`.
    pub fn from_env() -> Result<Self> {
        let src = env_dir(SRC_DIR_ENV);
        let tmp = env_dir(TMP_DIR_ENV);
        Self::resolve(src.as_deref(), tmp.as_deref(), &Config::default())
    }

    /// Pick each root from the explicit value if given, else from `config`.
    pub fn resolve(src: Option<&Path>, tmp: Option<&Path>, config: &Config) -> Result<Self> {
        let src = Self::pick_root(SRC_DIR_ENV, src, config.src_dir.as_deref())?;
        let tmp = Self::pick_root(TMP_DIR_ENV, tmp, config.tmp_dir.as_deref())?;
        Ok(Self {
            src_root: src,
            tmp_root: tmp,
        })
    }

    /// Resolve one root, preferring `explicit` over `fallback`.
    ///
    /// `name` is the environment variable the root is conventionally set by
    /// and only appears in error messages.
    pub fn pick_root(name: &str, explicit: Option<&Path>, fallback: Option<&Path>) -> Result<PathBuf> {
        let Some(path) = explicit.or(fallback) else {
            return Err(LintError::ConfigError(format!("{} is not set", name)));
        };
        resolve_dir(name, path)
    }
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve_dir(name: &str, path: &Path) -> Result<PathBuf> {
    let resolved = path.canonicalize().map_err(|e| {
        LintError::ConfigError(format!(
            "{} is not a directory: '{}' ({})",
            name,
            path.display(),
            e
        ))
    })?;

    if !resolved.is_dir() {
        return Err(LintError::ConfigError(format!(
            "{} is not a directory: '{}'",
            name,
            path.display()
        )));
    }

    log::debug!("{} resolved to {}", name, resolved.display());
    Ok(resolved)
}
