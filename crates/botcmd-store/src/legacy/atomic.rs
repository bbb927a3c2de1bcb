//! Atomic write primitives
//!
//! Temp file in the target directory, then rename over the target.

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file
///
/// Readers see either the old file or the complete new one, never a
/// partial write.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_export_dir", e))?;
    }

    let temp_path = temp_path_for(target_path);

    {
        let mut file = fs::File::create(&temp_path).map_err(|e| io_error("write_export_temp", e))?;
        file.write_all(content)
            .map_err(|e| io_error("write_export_temp", e))?;
        file.sync_all().map_err(|e| io_error("sync_export_temp", e))?;
    }

    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_export_temp", e))?;

    Ok(())
}

/// Sibling temp path `<file name>.<pid>.tmp`
///
/// Keeps the full file name so exporting `commands.json` never touches an
/// unrelated `commands.tmp`.
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("export"));
    name.push(format!(".{}.tmp", std::process::id()));
    target_path.with_file_name(name)
}
