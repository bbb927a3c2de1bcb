//! Mutation inventory
//!
//! Every write the store performs is expressed as a `Mutation` and run
//! through `apply()`. The returned `Change` tells the persistence layer which
//! rows to rewrite.

use crate::model::CommandName;

/// A write request against the command table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Create a command with no responses
    Add { name: String },

    /// Create a command and its first responses in one write
    Create { name: String, lines: Vec<String> },

    /// Replace a command's responses with the filtered raw lines
    SaveResponses { name: String, lines: Vec<String> },

    /// Remove a command
    Delete { name: String },

    /// Insert or replace a command wholesale (bulk import)
    Upsert { name: String, lines: Vec<String> },
}

impl Mutation {
    /// Operation name used in logs and error context
    pub fn op(&self) -> &'static str {
        match self {
            Mutation::Add { .. } | Mutation::Create { .. } => "add_command",
            Mutation::SaveResponses { .. } => "save_responses",
            Mutation::Delete { .. } => "delete_command",
            Mutation::Upsert { .. } => "upsert_command",
        }
    }

    /// Name as submitted by the caller
    pub fn target(&self) -> &str {
        match self {
            Mutation::Add { name }
            | Mutation::Create { name, .. }
            | Mutation::SaveResponses { name, .. }
            | Mutation::Delete { name }
            | Mutation::Upsert { name, .. } => name,
        }
    }
}

/// What a successfully applied mutation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A new command; its responses, if any, are read from the new table
    Added(CommandName),
    /// Responses of an existing command were replaced
    Saved { name: CommandName, count: usize },
    /// The command no longer exists
    Deleted(CommandName),
    /// A command was written by import; `created` is true when it was new
    Upserted { name: CommandName, created: bool },
}

impl Change {
    pub fn name(&self) -> &CommandName {
        match self {
            Change::Added(name)
            | Change::Saved { name, .. }
            | Change::Deleted(name)
            | Change::Upserted { name, .. } => name,
        }
    }
}
