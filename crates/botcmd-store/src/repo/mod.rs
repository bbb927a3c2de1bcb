//! Repository layer between `CommandTable` and SQLite rows

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::{CommandTimestamps, SqliteRepo};
