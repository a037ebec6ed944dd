//! `stagelint filter`: restrict a report to staged lines.

use super::io::{read_input, write_output};
use super::{load_changes, load_config};
use crate::cli::{FilterArgs, GlobalArgs};
use stagelint::config::{Workspace, validate_diff_filter};
use stagelint::error::Result;
use stagelint::exit_codes;
use stagelint::filter::ReportFilter;
use stagelint::report::Report;

pub(super) fn cmd_filter(global: &GlobalArgs, args: FilterArgs) -> Result<i32> {
    // Configuration is checked before anything else is read or fetched.
    let config = load_config(global)?;
    let workspace = Workspace::resolve(
        global.src_dir.as_deref(),
        global.tmp_dir.as_deref(),
        &config,
    )?;
    let diff_filter = args
        .diff_filter
        .unwrap_or_else(|| config.diff_filter.clone());
    validate_diff_filter(&diff_filter)?;

    let report = Report::from_json(&read_input(args.report.as_deref())?)?;
    let changes = load_changes(args.diff.as_deref(), &workspace.src_root, &diff_filter)?;
    log::info!("{} file(s) with staged changes", changes.len());

    let filtered = ReportFilter::from_workspace(&workspace).filter(report, &changes);
    write_output(args.output.as_deref(), &filtered.to_json_pretty()?)?;

    log::info!(
        "{} error(s), {} warning(s) on changed lines",
        filtered.errors(),
        filtered.warnings()
    );

    Ok(verdict(
        &filtered,
        args.fail_on_warnings || config.fail_on_warnings,
    ))
}

/// Exit code for a filtered report.
pub(super) fn verdict(report: &Report, fail_on_warnings: bool) -> i32 {
    if report.errors() > 0 || (fail_on_warnings && report.warnings() > 0) {
        exit_codes::FINDINGS
    } else {
        exit_codes::SUCCESS
    }
}
