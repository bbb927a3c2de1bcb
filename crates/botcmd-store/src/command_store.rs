//! Concurrency-safe command store
//!
//! ## Locking model
//!
//! - `conn` (a `Mutex`) is the single writer lock. Every mutation holds it
//!   across validate, persist and publish, so writers are fully serialized
//!   and the later writer always sees the earlier writer's result.
//! - `table` holds an `Arc` snapshot. Readers clone the `Arc` under a short
//!   read lock and never wait on disk I/O. A snapshot is replaced only after
//!   its transaction has committed, so readers see the state before or after
//!   a write, never a partial one, and memory never runs ahead of disk.
//!
//! Poisoned locks are recovered: the table is only ever swapped whole, and an
//! interrupted transaction rolls back when dropped.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Instant;

use botcmd_core::{
    apply, log_op_end, log_op_error, log_op_start, Change, CmdError, CommandName, CommandTable,
    EmptySavePolicy, Mutation, SaveOutcome,
};
use rusqlite::Connection;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::legacy::{self, LegacyEntry};
use crate::migrations::apply_migrations;
use crate::repo::{hydration, CommandTimestamps, SqliteRepo};

/// Counts from a legacy import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Commands that did not exist before the import
    pub added: usize,
    /// Existing commands whose responses were replaced
    pub replaced: usize,
    /// Existing commands removed because every imported line was blank
    /// (only under `EmptySavePolicy::Delete`)
    pub deleted: usize,
}

/// Durable mapping of command name to ordered response lines
pub struct CommandStore {
    conn: Mutex<Connection>,
    table: RwLock<Arc<CommandTable>>,
    policy: EmptySavePolicy,
}

impl CommandStore {
    /// Open the store described by `config`
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Self::open_at(&config.db_path, config.empty_save_policy)
    }

    /// Open (or create) a store at `path`, migrate it and load every command
    pub fn open_at(path: &Path, policy: EmptySavePolicy) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn, policy)
    }

    /// Open a throwaway in-memory store (for testing)
    pub fn open_in_memory(policy: EmptySavePolicy) -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::from_connection(conn, policy)
    }

    fn from_connection(mut conn: Connection, policy: EmptySavePolicy) -> Result<Self> {
        let start = Instant::now();
        log_op_start!("open_store");

        let result = apply_migrations(&mut conn).and_then(|()| hydration::load_table(&conn));
        let table = finish("open_store", start, result)?;

        tracing::debug!(command_count = table.len(), "command table hydrated");

        Ok(Self {
            conn: Mutex::new(conn),
            table: RwLock::new(Arc::new(table)),
            policy,
        })
    }

    pub fn policy(&self) -> EmptySavePolicy {
        self.policy
    }

    /// Snapshot of every command in insertion order
    ///
    /// The returned table is immutable; later writes publish a new snapshot
    /// rather than changing this one.
    pub fn list_commands(&self) -> Result<Arc<CommandTable>> {
        Ok(self.snapshot())
    }

    /// Response lines of one command
    ///
    /// # Errors
    /// * `NotFound` - If no command has this exact name
    pub fn get_command(&self, name: &str) -> Result<Vec<String>> {
        self.snapshot()
            .get(name)
            .map(|cmd| cmd.responses().to_vec())
            .ok_or_else(|| {
                CmdError::from(botcmd_core::CommandError::NotFound {
                    name: name.to_string(),
                })
                .with_op("get_command")
            })
    }

    /// Create an empty command and persist it immediately
    ///
    /// # Errors
    /// * `InvalidName` - If the name is blank after trimming
    /// * `AlreadyExists` - If the (case-sensitive) name is taken
    /// * `StorageUnavailable` - If the write could not be committed
    pub fn add_command(&self, name: &str) -> Result<CommandName> {
        let start = Instant::now();
        log_op_start!("add_command", command = name);

        let result = self
            .mutate(Mutation::Add {
                name: name.to_string(),
            })
            .map(|change| change.name().clone());

        finish("add_command", start, result)
    }

    /// Create a command together with its first responses
    ///
    /// One transaction: either the command exists with the filtered lines or
    /// nothing was written. If no line survives filtering the command is
    /// created empty.
    ///
    /// # Errors
    /// * `InvalidName` - If the name is blank after trimming
    /// * `AlreadyExists` - If the (case-sensitive) name is taken
    /// * `StorageUnavailable` - If the write could not be committed
    pub fn add_command_with_responses<I, S>(&self, name: &str, raw: I) -> Result<CommandName>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let lines: Vec<String> = raw.into_iter().map(|l| l.as_ref().to_string()).collect();
        log_op_start!("add_command", command = name, submitted = lines.len());

        let result = self
            .mutate(Mutation::Create {
                name: name.to_string(),
                lines,
            })
            .map(|change| change.name().clone());

        finish("add_command", start, result)
    }

    /// Replace a command's responses with the filtered `raw` lines
    ///
    /// Lines are trimmed, blank lines dropped, order kept: the same rule
    /// `render_preview` uses. On any error the previously stored responses
    /// remain, both in memory and on disk.
    ///
    /// # Errors
    /// * `NotFound` - If the command does not exist
    /// * `EmptyResult` - If no line survives and the policy is `Reject`
    /// * `StorageUnavailable` - If the write could not be committed
    pub fn save_responses<I, S>(&self, name: &str, raw: I) -> Result<SaveOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let lines: Vec<String> = raw.into_iter().map(|l| l.as_ref().to_string()).collect();
        log_op_start!("save_responses", command = name, submitted = lines.len());

        let result = self
            .mutate(Mutation::SaveResponses {
                name: name.to_string(),
                lines,
            })
            .map(|change| match change {
                Change::Saved { count, .. } => SaveOutcome::Saved { count },
                _ => SaveOutcome::Deleted,
            });

        finish("save_responses", start, result)
    }

    /// Remove a command and its responses
    ///
    /// # Errors
    /// * `NotFound` - If the command does not exist, including a repeated delete
    /// * `StorageUnavailable` - If the write could not be committed
    pub fn delete_command(&self, name: &str) -> Result<()> {
        let start = Instant::now();
        log_op_start!("delete_command", command = name);

        let result = self
            .mutate(Mutation::Delete {
                name: name.to_string(),
            })
            .map(|_| ());

        finish("delete_command", start, result)
    }

    /// When a command was created and last written (unix seconds)
    ///
    /// # Errors
    /// * `NotFound` - If no command has this exact name
    /// * `StorageUnavailable` - If the row could not be read
    pub fn timestamps(&self, name: &str) -> Result<CommandTimestamps> {
        let conn = self.writer();
        SqliteRepo::timestamps(&conn, name)?.ok_or_else(|| {
            CmdError::from(botcmd_core::CommandError::NotFound {
                name: name.to_string(),
            })
            .with_op("timestamps")
        })
    }

    /// Re-read every command from disk and publish it as the new snapshot
    pub fn reload(&self) -> Result<()> {
        let start = Instant::now();
        log_op_start!("reload");

        let conn = self.writer();
        let result = hydration::load_table(&conn).map(|table| self.publish(table));

        finish("reload", start, result)
    }

    /// Import a legacy `commands.json` document in one transaction
    ///
    /// Names new to the store are appended in document order; existing names
    /// have their responses replaced. An all-blank entry creates an empty
    /// command when the name is new. For a populated command it follows the
    /// empty-save policy, as a save would.
    ///
    /// # Errors
    /// * `InvalidInput` - If the document is not valid legacy JSON
    /// * `InvalidName` - If any entry has a blank name; nothing is imported
    /// * `EmptyResult` - If an entry would empty a populated command under
    ///   `Reject`; nothing is imported
    /// * `StorageUnavailable` - If the file cannot be read or the write fails
    pub fn import_legacy(&self, path: &Path) -> Result<ImportReport> {
        let start = Instant::now();
        log_op_start!("import_legacy", path = %path.display());

        let result = legacy::read_legacy(path).and_then(|entries| self.upsert_all(entries));

        finish("import_legacy", start, result)
    }

    /// Write the current snapshot as a legacy `commands.json` document
    ///
    /// Returns the number of commands written.
    pub fn export_legacy(&self, path: &Path) -> Result<usize> {
        let start = Instant::now();
        log_op_start!("export_legacy", path = %path.display());

        let snapshot = self.snapshot();
        let result = legacy::write_legacy(path, &snapshot).map(|()| snapshot.len());

        finish("export_legacy", start, result)
    }

    /// Validate, persist and publish one mutation under the writer lock
    fn mutate(&self, mutation: Mutation) -> Result<Change> {
        let op = mutation.op();
        let target = mutation.target().to_string();

        let mut conn = self.writer();
        let current = self.snapshot();

        let (next, change) = apply((*current).clone(), mutation, self.policy)
            .map_err(|e| CmdError::from(e).with_op(op).with_command(target))?;

        let tx = conn.transaction().map_err(from_rusqlite)?;
        SqliteRepo::persist_change(&tx, &next, &change, now())?;
        tx.commit().map_err(from_rusqlite)?;

        self.publish(next);
        Ok(change)
    }

    fn upsert_all(&self, entries: Vec<LegacyEntry>) -> Result<ImportReport> {
        let mut conn = self.writer();
        let mut next = (*self.snapshot()).clone();
        let mut changes = Vec::with_capacity(entries.len());

        for LegacyEntry { name, lines } in entries {
            let mutation = Mutation::Upsert {
                name: name.clone(),
                lines,
            };
            let (table, change) = apply(next, mutation, self.policy)
                .map_err(|e| CmdError::from(e).with_op("import_legacy").with_command(name))?;
            next = table;
            changes.push(change);
        }

        let now = now();
        let tx = conn.transaction().map_err(from_rusqlite)?;
        for change in &changes {
            SqliteRepo::persist_change(&tx, &next, change, now)?;
        }
        tx.commit().map_err(from_rusqlite)?;

        self.publish(next);

        let mut report = ImportReport::default();
        for change in &changes {
            match change {
                Change::Upserted { created: true, .. } => report.added += 1,
                Change::Deleted(_) => report.deleted += 1,
                _ => report.replaced += 1,
            }
        }
        Ok(report)
    }

    fn writer(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self) -> Arc<CommandTable> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, next: CommandTable) {
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Emit the end or end_error event for an operation and pass the result on
fn finish<T>(op: &'static str, start: Instant, result: Result<T>) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}
