//! Line classification helpers for the diff parser.

use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break pattern"));

// Counts are optional: git writes `@@ -3 +3 @@` for single-line ranges.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -[0-9]+(?:,[0-9]+)? \+([0-9]+)(?:,[0-9]+)? @@").expect("valid hunk pattern")
});

/// Split diff text on `\n`, `\r\n` or `\r`.
pub(super) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

/// What a `+++` header says about the file that follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum NewFileHeader {
    /// The file exists in the new tree under this relative path.
    Path(String),
    /// `+++ /dev/null`: the file is gone from the new tree.
    Deleted,
}

/// Parse a `+++ <prefix>/<path>` new-file header.
///
/// The path is everything after the first `/` of the filename field, which
/// strips git's `b/` prefix. Returns `None` if the line is not such a header.
pub(super) fn parse_new_file_header(line: &str) -> Option<NewFileHeader> {
    let rest = line.strip_prefix("+++")?;
    let mut chars = rest.chars();
    if !chars.next()?.is_whitespace() {
        return None;
    }

    // GNU diff appends a tab (and sometimes a timestamp) after the name.
    let name = chars.as_str();
    let name = name.split('\t').next().unwrap_or(name);

    if name == "/dev/null" {
        return Some(NewFileHeader::Deleted);
    }

    let path = match name.find('/') {
        Some(slash) => &name[slash + 1..],
        None => name,
    };

    Some(NewFileHeader::Path(normalize_path(path)))
}

/// Parse the new-file start line out of a hunk header.
///
/// Format: `@@ -old_start[,old_len] +new_start[,new_len] @@ [context]`.
/// Returns `None` for anything else, including start numbers that do not
/// fit in a `u32`.
pub(super) fn parse_hunk_start(line: &str) -> Option<u32> {
    let caps = HUNK_HEADER.captures(line)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
