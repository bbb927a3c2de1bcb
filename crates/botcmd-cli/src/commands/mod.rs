//! Subcommand implementations, one module per admin surface

pub mod add;
pub mod delete;
pub mod legacy;
pub mod list;
pub mod preview;
pub mod save;
pub mod show;

use std::path::Path;

/// Read response lines from a file, one line per response
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}
