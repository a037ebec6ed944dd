//! Reading inputs and writing the report.

use stagelint::error::Result;
use std::io::{Read, Write};
use std::path::Path;

/// Read a whole file, or stdin for `None` / `-`.
pub(super) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `text` plus a trailing newline to a file, or stdout for `None` / `-`.
pub(super) fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::write(path, format!("{}\n", text))?;
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
