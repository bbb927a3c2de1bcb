//! Error handling for botcmd-store
//!
//! Wraps the core `CmdError` facility with store-specific constructors.

use botcmd_core::errors::{CmdError, CmdErrorKind};

/// Result type alias using CmdError
pub type Result<T> = std::result::Result<T, CmdError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> CmdError {
    CmdError::new(CmdErrorKind::StorageUnavailable)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> CmdError {
    CmdError::new(CmdErrorKind::StorageUnavailable)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> CmdError {
    CmdError::new(CmdErrorKind::StorageUnavailable)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> CmdError {
    CmdError::new(CmdErrorKind::StorageUnavailable)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error for a malformed input document
pub fn invalid_input(operation: &str, reason: impl Into<String>) -> CmdError {
    CmdError::new(CmdErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_message(reason)
}

/// Create an error for a row the in-memory table expects but SQLite lacks
pub fn missing_row(name: &str) -> CmdError {
    CmdError::new(CmdErrorKind::StorageUnavailable)
        .with_op("persist_change")
        .with_command(name)
        .with_message("command row missing from database")
}
