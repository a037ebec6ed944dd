//! Report filtering against a [`ChangeMap`].
//!
//! Both report shapes go through the same steps: resolve the report path
//! against the temporary workspace root, keep only the message lines the
//! diff added, and recount errors and warnings from what is left.
//!
//! The shapes differ on entries that cannot be matched. A single-file report
//! that does not resolve, or has no diff entry, is returned untouched; in a
//! multi-file report such entries are dropped.

mod paths;


use crate::config::Workspace;
use crate::diff::ChangeMap;
use crate::report::{FileReport, Messages, MultiReport, Report, Totals};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Projects issue reports onto the lines added by a diff.
#[derive(Debug, Clone)]
pub struct ReportFilter {
    tmp_root: PathBuf,
}

impl ReportFilter {
    /// Create a filter resolving report paths against `tmp_root`.
    pub fn new(tmp_root: impl Into<PathBuf>) -> Self {
        Self {
            tmp_root: tmp_root.into(),
        }
    }

    pub fn from_workspace(workspace: &Workspace) -> Self {
        Self::new(workspace.tmp_root.clone())
    }

    pub fn tmp_root(&self) -> &Path {
        &self.tmp_root
    }

    /// Path of `path` relative to the temporary root, with `/` separators.
    ///
    /// Relative paths are taken as already relative to the root. Returns
    /// `None` when the path lies outside the root or is the root itself.
    pub fn relative_path(&self, path: &str) -> Option<String> {
        paths::relative_to(&self.tmp_root, path)
    }

    /// Filter either report shape.
    pub fn filter(&self, report: Report, changes: &ChangeMap) -> Report {
        match report {
            Report::Single(file) => Report::Single(self.filter_single(file, changes)),
            Report::Multi(multi) => Report::Multi(self.filter_multi(multi, changes)),
        }
    }

    /// Filter a single-file report.
    ///
    /// On a match the filename is rewritten to the relative path. Unmatched
    /// reports come back unmodified so a per-file report is never emptied
    /// by an incomplete diff.
    pub fn filter_single(&self, report: FileReport, changes: &ChangeMap) -> FileReport {
        let Some(filename) = report.filename.as_deref() else {
            return report;
        };
        let Some(relative) = self.relative_path(filename) else {
            log::debug!("{} is outside {}, left unfiltered", filename, self.tmp_root.display());
            return report;
        };
        let Some(lines) = changes.get(&relative) else {
            log::debug!("{} has no staged changes, left unfiltered", relative);
            return report;
        };

        let mut filtered = restrict(report, lines);
        filtered.filename = Some(relative);
        filtered
    }

    /// Filter a multi-file report.
    ///
    /// Retained files are keyed by their relative path and the run totals
    /// are rebuilt as the sum of the per-file counts. Entries that resolve
    /// to the same relative path are merged.
    pub fn filter_multi(&self, report: MultiReport, changes: &ChangeMap) -> MultiReport {
        let MultiReport { files, totals } = report;
        let mut kept = BTreeMap::new();

        for (path, file) in files {
            let Some(relative) = self.relative_path(&path) else {
                log::debug!("dropping {}: outside {}", path, self.tmp_root.display());
                continue;
            };
            let Some(lines) = changes.get(&relative) else {
                log::debug!("dropping {}: no staged changes", relative);
                continue;
            };
            let file = restrict(file, lines);
            match kept.entry(relative) {
                Entry::Vacant(slot) => {
                    slot.insert(file);
                }
                Entry::Occupied(mut slot) => {
                    log::warn!("{} resolves to {}, merging its issues", path, slot.key());
                    merge_into(slot.get_mut(), file);
                }
            }
        }

        let totals = Totals {
            errors: kept.values().map(|file| file.errors).sum(),
            warnings: kept.values().map(|file| file.warnings).sum(),
            extra: totals.extra,
        };

        MultiReport {
            files: kept,
            totals,
        }
    }
}

/// Keep only the message lines listed in `lines`, then recount.
fn restrict(mut file: FileReport, lines: &[u32]) -> FileReport {
    let wanted: BTreeSet<u32> = lines.iter().copied().collect();
    let messages: Messages = std::mem::take(&mut file.messages)
        .into_iter()
        .filter(|(line, _)| wanted.contains(line))
        .collect();

    file.messages = messages;
    file.recount();
    file
}

/// Append the issues of `other` to `file` and recount.
fn merge_into(file: &mut FileReport, other: FileReport) {
    for (line, columns) in other.messages {
        let target = file.messages.entry(line).or_default();
        for (column, issues) in columns {
            target.entry(column).or_default().extend(issues);
        }
    }
    file.recount();
}
