//! botcmd store - durable, concurrency-safe command storage
//!
//! Provides:
//! - SQLite schema with an embedded, checksummed migrations framework
//! - Repository and hydration between `CommandTable` and SQLite rows
//! - `CommandStore`: one writer lock, snapshot reads, write-through persistence
//! - Import/export of the legacy `commands.json` document
//! - TOML configuration

pub mod command_store;
pub mod config;
pub mod db;
pub mod errors;
pub mod legacy;
pub mod migrations;
pub mod repo;

pub use command_store::{CommandStore, ImportReport};
pub use repo::CommandTimestamps;
pub use config::StoreConfig;
pub use errors::Result;
