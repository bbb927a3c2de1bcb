//! SQLite repository implementation
//!
//! Row-level writes for commands and responses. Callers run these inside a
//! transaction (a `Transaction` derefs to `Connection`), so one logical
//! change lands on disk all at once or not at all.

use crate::errors::{from_rusqlite, missing_row, Result};
use botcmd_core::{Change, CommandTable};
use rusqlite::{Connection, OptionalExtension};

/// Created/updated timestamps of a persisted command (unix seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTimestamps {
    pub created_at: i64,
    pub updated_at: i64,
}

/// SQLite repository for commands
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a new command row with no responses
    pub fn insert_command(conn: &Connection, name: &str, now: i64) -> Result<i64> {
        conn.execute(
            "INSERT INTO commands (name, created_at, updated_at) VALUES (?1, ?2, ?2)",
            rusqlite::params![name, now],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Look up a command's row id
    pub fn command_id(conn: &Connection, name: &str) -> Result<Option<i64>> {
        conn.query_row(
            "SELECT id FROM commands WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Replace every response row of a command
    pub fn replace_responses(conn: &Connection, name: &str, lines: &[String], now: i64) -> Result<()> {
        let command_id = Self::command_id(conn, name)?.ok_or_else(|| missing_row(name))?;

        conn.execute("DELETE FROM responses WHERE command_id = ?1", [command_id])
            .map_err(from_rusqlite)?;

        let mut stmt = conn
            .prepare("INSERT INTO responses (command_id, position, text) VALUES (?1, ?2, ?3)")
            .map_err(from_rusqlite)?;
        for (position, text) in lines.iter().enumerate() {
            stmt.execute(rusqlite::params![command_id, position as i64, text])
                .map_err(from_rusqlite)?;
        }

        conn.execute(
            "UPDATE commands SET updated_at = ?1 WHERE id = ?2",
            rusqlite::params![now, command_id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a command; its responses cascade. Returns false if absent.
    pub fn delete_command(conn: &Connection, name: &str) -> Result<bool> {
        let deleted = conn
            .execute("DELETE FROM commands WHERE name = ?1", [name])
            .map_err(from_rusqlite)?;
        Ok(deleted > 0)
    }

    /// Created/updated times of a command, `None` if it has no row
    pub fn timestamps(conn: &Connection, name: &str) -> Result<Option<CommandTimestamps>> {
        conn.query_row(
            "SELECT created_at, updated_at FROM commands WHERE name = ?1",
            [name],
            |row| {
                Ok(CommandTimestamps {
                    created_at: row.get(0)?,
                    updated_at: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Write one applied change to disk
    ///
    /// `next` is the table the change produced; replaced response lists are
    /// read from it.
    pub fn persist_change(conn: &Connection, next: &CommandTable, change: &Change, now: i64) -> Result<()> {
        let name = change.name().as_str();
        match change {
            Change::Added(_) => {
                Self::insert_command(conn, name, now)?;
                let lines = Self::lines_of(next, name)?;
                if !lines.is_empty() {
                    Self::replace_responses(conn, name, lines, now)?;
                }
            }
            Change::Saved { .. } => {
                Self::replace_responses(conn, name, Self::lines_of(next, name)?, now)?;
            }
            Change::Deleted(_) => {
                if !Self::delete_command(conn, name)? {
                    return Err(missing_row(name));
                }
            }
            Change::Upserted { created, .. } => {
                if *created {
                    Self::insert_command(conn, name, now)?;
                }
                Self::replace_responses(conn, name, Self::lines_of(next, name)?, now)?;
            }
        }
        Ok(())
    }

    fn lines_of<'a>(table: &'a CommandTable, name: &str) -> Result<&'a [String]> {
        table
            .get(name)
            .map(|cmd| cmd.responses())
            .ok_or_else(|| missing_row(name))
    }
}
