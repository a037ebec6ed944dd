//! Tests for the command handlers.

use super::changes::cmd_changes;
use super::filter::{cmd_filter, verdict};
use crate::cli::{ChangesArgs, FilterArgs, GlobalArgs};
use serde_json::{Value, json};
use stagelint::error::LintError;
use stagelint::exit_codes;
use stagelint::report::Report;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DIFF: &str = "diff --git a/foo.php b/foo.php
--- a/foo.php
+++ b/foo.php
@@ -10,2 +10,3 @@
 context line
+new line one
+new line two
";

struct Fixture {
    _dirs: (TempDir, TempDir, TempDir),
    src: PathBuf,
    tmp: PathBuf,
    scratch: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let src = TempDir::new().unwrap();
        let tmp = TempDir::new().unwrap();
        let scratch = TempDir::new().unwrap();
        Self {
            src: src.path().canonicalize().unwrap(),
            tmp: tmp.path().canonicalize().unwrap(),
            scratch: scratch.path().to_path_buf(),
            _dirs: (src, tmp, scratch),
        }
    }

    fn global(&self) -> GlobalArgs {
        GlobalArgs {
            src_dir: Some(self.src.clone()),
            tmp_dir: Some(self.tmp.clone()),
            config: None,
            verbose: 0,
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.scratch.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn report_path(&self, value: &Value) -> PathBuf {
        self.write("report.json", &value.to_string())
    }

    fn filter_args(&self, report: PathBuf) -> FilterArgs {
        FilterArgs {
            report: Some(report),
            diff: Some(self.write("staged.diff", DIFF)),
            output: Some(self.scratch.join("out.json")),
            ..FilterArgs::default()
        }
    }

    fn output(&self) -> Value {
        let text = std::fs::read_to_string(self.scratch.join("out.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn tmp_file(&self, name: &str) -> String {
        self.tmp.join(name).to_string_lossy().into_owned()
    }
}

#[test]
fn test_filter_multi_report_end_to_end() {
    let fx = Fixture::new();
    let mut files = serde_json::Map::new();
    files.insert(
        fx.tmp_file("foo.php"),
        json!({
            "messages": {
                "11": {"1": [{"type": "ERROR", "message": "new"}]},
                "99": {"1": [{"type": "WARNING", "message": "old"}]}
            },
            "errors": 1,
            "warnings": 1
        }),
    );
    let report = json!({"files": files, "totals": {"errors": 1, "warnings": 1}});

    let code = cmd_filter(&fx.global(), fx.filter_args(fx.report_path(&report))).unwrap();

    assert_eq!(code, exit_codes::FINDINGS);
    assert_eq!(
        fx.output(),
        json!({
            "files": {
                "foo.php": {
                    "messages": {"11": {"1": [{"type": "ERROR", "message": "new"}]}},
                    "errors": 1,
                    "warnings": 0
                }
            },
            "totals": {"errors": 1, "warnings": 0}
        })
    );
}

#[test]
fn test_filter_single_report_with_only_old_warnings_passes() {
    let fx = Fixture::new();
    let report = json!({
        "filename": fx.tmp_file("foo.php"),
        "messages": {"3": {"1": [{"type": "ERROR"}]}, "12": {"2": [{"type": "WARNING"}]}},
        "errors": 1,
        "warnings": 1
    });

    let code = cmd_filter(&fx.global(), fx.filter_args(fx.report_path(&report))).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let out = fx.output();
    assert_eq!(out["filename"], json!("foo.php"));
    assert_eq!(out["errors"], json!(0));
    assert_eq!(out["warnings"], json!(1));
}

#[test]
fn test_filter_fail_on_warnings() {
    let fx = Fixture::new();
    let report = json!({
        "filename": fx.tmp_file("foo.php"),
        "messages": {"12": {"2": [{"type": "WARNING"}]}}
    });

    let mut args = fx.filter_args(fx.report_path(&report));
    args.fail_on_warnings = true;

    assert_eq!(cmd_filter(&fx.global(), args).unwrap(), exit_codes::FINDINGS);
}

#[test]
fn test_filter_fail_on_warnings_from_config_file() {
    let fx = Fixture::new();
    let report = json!({
        "filename": fx.tmp_file("foo.php"),
        "messages": {"11": {"2": [{"type": "WARNING"}]}}
    });
    let mut global = fx.global();
    global.config = Some(fx.write("stagelint.yaml", "fail_on_warnings: true\n"));

    let code = cmd_filter(&global, fx.filter_args(fx.report_path(&report))).unwrap();
    assert_eq!(code, exit_codes::FINDINGS);
}

#[test]
fn test_filter_missing_tmp_root_fails_before_writing() {
    let fx = Fixture::new();
    let mut global = fx.global();
    global.tmp_dir = Some(fx.scratch.join("does-not-exist"));
    let report = json!({"filename": "a.php", "messages": {}});

    let err = cmd_filter(&global, fx.filter_args(fx.report_path(&report))).unwrap_err();

    assert!(matches!(err, LintError::ConfigError(_)));
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    assert!(!fx.scratch.join("out.json").exists());
}

#[test]
fn test_filter_unset_root_is_config_error() {
    let fx = Fixture::new();
    let mut global = fx.global();
    global.src_dir = None;
    let report = json!({"filename": "a.php", "messages": {}});

    let err = cmd_filter(&global, fx.filter_args(fx.report_path(&report))).unwrap_err();
    assert!(err.to_string().contains("STAGELINT_SRC_DIR is not set"));
}

#[test]
fn test_filter_git_failure_outside_repository() {
    let fx = Fixture::new();
    let report = json!({"filename": fx.tmp_file("foo.php"), "messages": {}});
    let mut args = fx.filter_args(fx.report_path(&report));
    args.diff = None;

    // The source root is a plain directory, not a repository.
    let err = cmd_filter(&fx.global(), args).unwrap_err();

    assert!(matches!(err, LintError::GitError(_)));
    assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    assert!(!fx.scratch.join("out.json").exists());
}

#[test]
fn test_filter_rejects_malformed_report() {
    let fx = Fixture::new();
    let path = fx.write("report.json", r#"{"unexpected": true}"#);

    let err = cmd_filter(&fx.global(), fx.filter_args(path)).unwrap_err();
    assert!(matches!(err, LintError::ReportError(_)));
}

#[test]
fn test_filter_rejects_bad_diff_filter() {
    let fx = Fixture::new();
    let report = json!({"filename": "a.php", "messages": {}});
    let mut args = fx.filter_args(fx.report_path(&report));
    args.diff_filter = Some("Z".to_string());

    let err = cmd_filter(&fx.global(), args).unwrap_err();
    assert!(matches!(err, LintError::ConfigError(_)));
}

#[test]
fn test_changes_from_diff_file_needs_no_roots() {
    let fx = Fixture::new();
    let args = ChangesArgs {
        diff: Some(fx.write("staged.diff", DIFF)),
        diff_filter: None,
    };

    let code = cmd_changes(&GlobalArgs::default(), args).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);
}

#[test]
fn test_changes_without_diff_requires_src_root() {
    let err = cmd_changes(&GlobalArgs::default(), ChangesArgs::default()).unwrap_err();
    assert!(matches!(err, LintError::ConfigError(_)));
}

#[test]
fn test_verdict() {
    let clean = Report::from_value(json!({"messages": {}, "errors": 0, "warnings": 2})).unwrap();
    let failing = Report::from_value(json!({"messages": {}, "errors": 1, "warnings": 0})).unwrap();

    assert_eq!(verdict(&clean, false), exit_codes::SUCCESS);
    assert_eq!(verdict(&clean, true), exit_codes::FINDINGS);
    assert_eq!(verdict(&failing, false), exit_codes::FINDINGS);
}

#[test]
fn test_missing_report_file_is_io_error() {
    let fx = Fixture::new();
    let err = cmd_filter(&fx.global(), fx.filter_args(Path::new("/no/such/report.json").into()))
        .unwrap_err();
    assert!(matches!(err, LintError::Io(_)));
}
