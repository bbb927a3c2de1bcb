//! Legacy `commands.json` interchange
//!
//! The earlier bot kept commands in a single JSON document:
//!
//! ```json
//! {
//!     "!hello": [
//!         { "responseLine1": "Hi there" },
//!         { "responseLine1": "Welcome!" }
//!     ]
//! }
//! ```
//!
//! This module reads and writes that shape so existing command sets can be
//! imported and exported.

mod atomic;
mod format;

pub use atomic::atomic_write;
pub use format::{parse_document, render_document, LegacyEntry};

use crate::errors::{io_error, Result};
use botcmd_core::CommandTable;
use std::path::Path;

/// Read and parse a legacy document from disk
pub fn read_legacy(path: &Path) -> Result<Vec<LegacyEntry>> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error("read_legacy", e))?;
    parse_document(&text)
}

/// Write a table to disk as a legacy document, atomically
pub fn write_legacy(path: &Path, table: &CommandTable) -> Result<()> {
    let bytes = render_document(table)?;
    atomic_write(path, &bytes)
}
