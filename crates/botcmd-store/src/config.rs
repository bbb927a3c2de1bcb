//! Store configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! db_path = "data/commands.db"
//! empty_save_policy = "reject"   # or "delete"
//! log_profile = "development"    # or "production"
//! ```
//!
//! Every key is optional; a missing file yields the defaults.

use crate::errors::{io_error, invalid_input, Result};
use botcmd_core::logging_facility::Profile;
use botcmd_core::EmptySavePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default database location, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "botcmd.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite database file
    pub db_path: PathBuf,
    /// What a save does when every submitted line is blank
    pub empty_save_policy: EmptySavePolicy,
    pub log_profile: Profile,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            empty_save_policy: EmptySavePolicy::default(),
            log_profile: Profile::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file is not an error and returns the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(io_error("load_config", e)),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| invalid_input("load_config", e.to_string()))
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}
