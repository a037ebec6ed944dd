//! Core diff parsing logic.

use super::ChangeMap;
use super::helpers::{NewFileHeader, parse_hunk_start, parse_new_file_header, split_lines};

/// Parse unified diff text into a [`ChangeMap`].
///
/// Header checks run before the generic added-line check because `+++`
/// headers also start with `+`. Lines that match nothing (malformed hunk
/// headers included) only advance the new-file line counter.
///
/// Every file named by a `+++` header gets an entry, even when the diff
/// holds no hunks for it.
pub fn parse_changes(diff_text: &str) -> ChangeMap {
    let mut changes = ChangeMap::new();
    let mut current_path: Option<String> = None;
    let mut line_number: u32 = 0;

    for line in split_lines(diff_text) {
        if let Some(header) = parse_new_file_header(line) {
            current_path = match header {
                NewFileHeader::Path(path) => {
                    changes.entry(path.clone()).or_default();
                    Some(path)
                }
                NewFileHeader::Deleted => None,
            };
            continue;
        }

        if let Some(start) = parse_hunk_start(line) {
            line_number = start;
            continue;
        }

        if line.starts_with('+') {
            if let Some(path) = &current_path {
                changes.entry(path.clone()).or_default().push(line_number);
            }
            line_number = line_number.saturating_add(1);
        } else if line.starts_with('-') || line.starts_with('\\') || line.is_empty() {
            // Removed lines and "\ No newline at end of file" markers do not
            // occupy a slot in the new file. Counting the marker would push a
            // replaced last line (`-old`, `\`, `+new`) one line too far.
        } else {
            line_number = line_number.saturating_add(1);
        }
    }

    log::debug!("parsed diff into {} changed file(s)", changes.len());
    changes
}
