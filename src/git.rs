//! Git command runner for stagelint.
//!
//! Wraps `git` invocations with captured stdout/stderr and maps failures to
//! [`LintError::GitError`]. All git access goes through this module.

use crate::error::{LintError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, untouched.
    ///
    /// Diff text is whitespace sensitive, so nothing is trimmed here.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.stdout.trim().is_empty()
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(LintError::GitError)` - git could not be spawned or exited non-zero
///
/// # Examples
///
/// ```no_run
/// use stagelint::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["diff", "--staged"])?;
/// println!("{}", output.stdout);
/// # Ok::<(), stagelint::error::LintError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    log::debug!("running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            LintError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(LintError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.join(" "),
            exit_code,
            error_msg
        )))
    }
}
