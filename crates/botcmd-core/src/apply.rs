//! Functional-boundary apply function
//!
//! ## Atomicity Contract
//!
//! `apply()` takes ownership of a table and either returns the new table
//! together with the `Change` it made, or an error. On error the caller's
//! previous snapshot is untouched, which is what lets the store validate a
//! write before it touches disk.
//!
//! ## Example
//!
//! ```
//! use botcmd_core::{apply, CommandTable, EmptySavePolicy, Mutation};
//!
//! let table = CommandTable::new();
//! let (table, _) = apply(
//!     table,
//!     Mutation::Add { name: "greet".to_string() },
//!     EmptySavePolicy::Reject,
//! )
//! .unwrap();
//! assert!(table.contains("greet"));
//! ```

use crate::commands::{Change, Mutation};
use crate::errors::{CommandError, Result};
use crate::model::CommandName;
use crate::ops::command_ops::{self, SaveOutcome, UpsertOutcome};
use crate::ops::CommandTable;
use crate::policy::EmptySavePolicy;

/// Apply a mutation to a table, returning the new table and what changed
///
/// # Errors
///
/// Returns the operation's error unchanged (`InvalidName`, `AlreadyExists`,
/// `NotFound`, `EmptyResult`). The input table is consumed; callers that need
/// the old state on failure pass a clone.
pub fn apply(
    mut state: CommandTable,
    mutation: Mutation,
    policy: EmptySavePolicy,
) -> Result<(CommandTable, Change)> {
    let change = match mutation {
        Mutation::Add { name } => {
            let name = command_ops::add_command(&mut state, &name)?;
            Change::Added(name)
        }

        Mutation::Create { name, lines } => {
            let name = command_ops::create_command(&mut state, &name, &lines)?;
            Change::Added(name)
        }

        Mutation::SaveResponses { name, lines } => {
            let key = existing_name(&state, &name)?;
            match command_ops::save_responses(&mut state, &name, &lines, policy)? {
                SaveOutcome::Saved { count } => Change::Saved { name: key, count },
                SaveOutcome::Deleted => Change::Deleted(key),
            }
        }

        Mutation::Delete { name } => {
            let removed = command_ops::delete_command(&mut state, &name)?;
            Change::Deleted(removed.name().clone())
        }

        Mutation::Upsert { name, lines } => {
            let key = CommandName::parse(&name)?;
            match command_ops::upsert_command(&mut state, &name, &lines, policy)? {
                UpsertOutcome::Created => Change::Upserted { name: key, created: true },
                UpsertOutcome::Replaced => Change::Upserted { name: key, created: false },
                UpsertOutcome::Deleted => Change::Deleted(key),
            }
        }
    };

    Ok((state, change))
}

fn existing_name(state: &CommandTable, name: &str) -> Result<CommandName> {
    command_ops::get_command(state, name)
        .map(|cmd| cmd.name().clone())
        .map_err(|_| CommandError::NotFound {
            name: name.to_string(),
        })
}
