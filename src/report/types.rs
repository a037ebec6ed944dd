//! Report types shared by the analysis stage, the filter and the renderer.

use crate::error::{LintError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::keys::{deserialize_count, deserialize_messages};

/// Issues of one file, keyed by line, then by column.
pub type Messages = BTreeMap<u32, BTreeMap<u32, Vec<Issue>>>;

/// Kind of a reported issue.
///
/// Serialized as the raw string the analysis stage used. Anything other
/// than `ERROR` or `WARNING` is kept verbatim in [`IssueKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueKind {
    Error,
    Warning,
    Other(String),
}

impl From<String> for IssueKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ERROR" => IssueKind::Error,
            "WARNING" => IssueKind::Warning,
            _ => IssueKind::Other(s),
        }
    }
}

impl From<&str> for IssueKind {
    fn from(s: &str) -> Self {
        IssueKind::from(s.to_string())
    }
}

impl From<IssueKind> for String {
    fn from(kind: IssueKind) -> Self {
        match kind {
            IssueKind::Error => "ERROR".to_string(),
            IssueKind::Warning => "WARNING".to_string(),
            IssueKind::Other(s) => s,
        }
    }
}

/// A single problem reported at a (line, column) position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Absent when the analysis stage left the kind out; such issues count
    /// toward neither total.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<IssueKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Identifier of the rule that produced the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Metadata stagelint does not interpret (severity, fixable, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Issue {
    /// Create an issue with only a kind and a message.
    pub fn new(kind: impl Into<IssueKind>, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            message: Some(message.into()),
            source: None,
            extra: Map::new(),
        }
    }
}

/// Error/warning tally of a set of issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub errors: u32,
    pub warnings: u32,
    /// Issues of any other kind; they count toward neither total.
    pub other: u32,
}

impl Counts {
    /// Count every issue in a messages table from scratch.
    pub fn tally(messages: &Messages) -> Self {
        let mut counts = Counts::default();
        for issue in messages.values().flat_map(|columns| columns.values().flatten()) {
            counts.record(issue.kind.as_ref());
        }
        counts
    }

    fn record(&mut self, kind: Option<&IssueKind>) {
        match kind {
            Some(IssueKind::Error) => self.errors += 1,
            Some(IssueKind::Warning) => self.warnings += 1,
            Some(IssueKind::Other(_)) | None => self.other += 1,
        }
    }

    /// Total number of issues counted.
    pub fn issues(&self) -> u32 {
        self.errors + self.warnings + self.other
    }
}

/// Report for one file.
///
/// `filename` is present in the single-file shape and absent inside a
/// multi-file report, where the path is the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(deserialize_with = "deserialize_messages")]
    pub messages: Messages,

    #[serde(default, deserialize_with = "deserialize_count")]
    pub errors: u32,

    #[serde(default, deserialize_with = "deserialize_count")]
    pub warnings: u32,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileReport {
    /// Recompute `errors` and `warnings` from the current messages.
    pub fn recount(&mut self) -> Counts {
        let counts = Counts::tally(&self.messages);
        self.errors = counts.errors;
        self.warnings = counts.warnings;
        counts
    }
}

/// Run-wide error/warning totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub errors: u32,

    #[serde(default, deserialize_with = "deserialize_count")]
    pub warnings: u32,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Report for a whole run, keyed by file path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiReport {
    pub files: BTreeMap<String, FileReport>,

    #[serde(default)]
    pub totals: Totals,
}

/// Either report shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Single(FileReport),
    Multi(MultiReport),
}

impl Report {
    /// Parse a report from JSON text, picking the shape by its keys.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| LintError::ReportError(format!("failed to parse report JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Build a report from a JSON value.
    ///
    /// Objects with a `files` key are multi-file reports, objects with a
    /// `messages` key are single-file reports.
    pub fn from_value(value: Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(LintError::ReportError(
                "report must be a JSON object".to_string(),
            ));
        };

        if object.contains_key("files") {
            serde_json::from_value(value)
                .map(Report::Multi)
                .map_err(|e| LintError::ReportError(format!("malformed multi-file report: {}", e)))
        } else if object.contains_key("messages") {
            serde_json::from_value(value)
                .map(Report::Single)
                .map_err(|e| {
                    LintError::ReportError(format!("malformed single-file report: {}", e))
                })
        } else {
            Err(LintError::ReportError(
                "report has neither `files` nor `messages`".to_string(),
            ))
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LintError::ReportError(format!("failed to serialize report: {}", e)))
    }

    /// Number of errors the report declares.
    pub fn errors(&self) -> u32 {
        match self {
            Report::Single(file) => file.errors,
            Report::Multi(multi) => multi.totals.errors,
        }
    }

    /// Number of warnings the report declares.
    pub fn warnings(&self) -> u32 {
        match self {
            Report::Single(file) => file.warnings,
            Report::Multi(multi) => multi.totals.warnings,
        }
    }
}
