//! Mapping report paths onto diff paths.

use std::path::{Component, Path};

/// Express `path` relative to `root` using `/` separators.
///
/// Absolute paths must lie strictly below `root`. Relative paths are taken
/// as relative to `root` already. Paths that climb with `..` never resolve.
pub(super) fn relative_to(root: &Path, path: &str) -> Option<String> {
    let path = Path::new(path);
    let relative = if path.is_absolute() {
        path.strip_prefix(root).ok()?
    } else {
        path
    };

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
