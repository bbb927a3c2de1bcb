use std::collections::HashMap;

use crate::model::{Command, CommandSummary};

/// Insertion-ordered table of commands
///
/// This is the in-memory snapshot the store hands to readers. Iteration
/// order is the order commands were first added; replacing an existing
/// command keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    commands: Vec<Command>,
    /// Name -> position in `commands`
    index: HashMap<String, usize>,
}

impl CommandTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a command by exact name
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index.get(name).map(|&pos| &self.commands[pos])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Command> {
        let pos = *self.index.get(name)?;
        self.commands.get_mut(pos)
    }

    /// Insert a command, replacing any command with the same name in place
    ///
    /// Returns `true` when the name was new to the table.
    pub fn insert(&mut self, command: Command) -> bool {
        let key = command.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&pos) => {
                self.commands[pos] = command;
                false
            }
            None => {
                self.index.insert(key, self.commands.len());
                self.commands.push(command);
                true
            }
        }
    }

    /// Remove a command, shifting later commands up one position
    pub fn remove(&mut self, name: &str) -> Option<Command> {
        let pos = self.index.remove(name)?;
        let removed = self.commands.remove(pos);
        for later in self.index.values_mut() {
            if *later > pos {
                *later -= 1;
            }
        }
        Some(removed)
    }

    /// Iterate commands in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name().as_str())
    }

    /// Summary rows in insertion order
    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.commands.iter().map(Command::summary).collect()
    }
}

impl<'a> IntoIterator for &'a CommandTable {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
