//! Hydration: rebuild a `CommandTable` from SQLite

use crate::errors::{from_rusqlite, invalid_input, Result};
use botcmd_core::{Command, CommandName, CommandTable};
use rusqlite::Connection;

/// Load every command, in insertion order, with responses in position order
pub fn load_table(conn: &Connection) -> Result<CommandTable> {
    let mut stmt = conn
        .prepare(
            "SELECT c.name, r.text
             FROM commands c
             LEFT JOIN responses r ON r.command_id = c.id
             ORDER BY c.id, r.position",
        )
        .map_err(from_rusqlite)?;

    let rows: Vec<(String, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let mut table = CommandTable::new();
    let mut current: Option<(CommandName, Vec<String>)> = None;

    for (name, text) in rows {
        let same = matches!(&current, Some((n, _)) if n.as_str() == name);
        if !same {
            if let Some((done, lines)) = current.take() {
                table.insert(Command::with_responses(done, lines));
            }
            let parsed = CommandName::parse(&name).map_err(|e| {
                invalid_input("load_table", e.to_string()).with_command(name.clone())
            })?;
            current = Some((parsed, Vec::new()));
        }
        if let (Some((_, lines)), Some(text)) = (current.as_mut(), text) {
            lines.push(text);
        }
    }
    if let Some((done, lines)) = current {
        table.insert(Command::with_responses(done, lines));
    }

    Ok(table)
}
