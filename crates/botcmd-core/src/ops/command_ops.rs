use super::table::CommandTable;
use crate::errors::{CommandError, Result};
use crate::model::{Command, CommandName};
use crate::policy::EmptySavePolicy;
use crate::rules::validation::normalize_responses;

/// Outcome of a successful `save_responses`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Responses were replaced; carries the number of stored lines
    Saved { count: usize },
    /// Every line was blank and the policy removed the command
    Deleted,
}

/// Outcome of a successful `upsert_command`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The name was new to the table
    Created,
    /// An existing command's responses were replaced
    Replaced,
    /// Every line was blank and the policy removed the existing command
    Deleted,
}

/// Add a new command with no responses
///
/// The name is trimmed before use.
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
/// * `AlreadyExists` - If a command with the same (case-sensitive) name exists
pub fn add_command(table: &mut CommandTable, raw_name: &str) -> Result<CommandName> {
    create_command(table, raw_name, std::iter::empty::<&str>())
}

/// Add a new command with initial responses
///
/// Lines go through the save filter. If none survive the command is created
/// empty, exactly as `add_command` would.
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
/// * `AlreadyExists` - If a command with the same (case-sensitive) name exists
pub fn create_command<I, S>(table: &mut CommandTable, raw_name: &str, raw: I) -> Result<CommandName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let name = CommandName::parse(raw_name)?;

    if table.contains(name.as_str()) {
        return Err(CommandError::AlreadyExists {
            name: name.to_string(),
        });
    }

    table.insert(Command::with_responses(name.clone(), raw));
    Ok(name)
}

/// Read a command by exact name
///
/// # Errors
/// * `NotFound` - If no command has this name
pub fn get_command<'a>(table: &'a CommandTable, name: &str) -> Result<&'a Command> {
    table.get(name).ok_or_else(|| CommandError::NotFound {
        name: name.to_string(),
    })
}

/// Replace a command's entire response sequence
///
/// Raw lines go through the shared filter: trimmed, blank lines dropped,
/// order kept. The table is only touched once validation has passed, so a
/// failed save leaves the previous responses in place.
///
/// # Errors
/// * `NotFound` - If the command does not exist
/// * `EmptyResult` - If nothing survives filtering and the policy is `Reject`
pub fn save_responses<I, S>(
    table: &mut CommandTable,
    name: &str,
    raw: I,
    policy: EmptySavePolicy,
) -> Result<SaveOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !table.contains(name) {
        return Err(CommandError::NotFound {
            name: name.to_string(),
        });
    }

    let lines = normalize_responses(raw);

    if lines.is_empty() {
        return match policy {
            EmptySavePolicy::Reject => Err(CommandError::EmptyResult {
                name: name.to_string(),
            }),
            EmptySavePolicy::Delete => {
                table.remove(name);
                Ok(SaveOutcome::Deleted)
            }
        };
    }

    let count = lines.len();
    let command = table.get_mut(name).ok_or_else(|| CommandError::NotFound {
        name: name.to_string(),
    })?;
    command.set_responses(lines);

    Ok(SaveOutcome::Saved { count })
}

/// Insert or replace a command wholesale, used by bulk import
///
/// A new name with no surviving lines is created empty, like `add_command`.
/// An existing name is replaced like `save_responses`, so an all-blank entry
/// falls under the empty-save policy instead of emptying a populated command.
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
/// * `EmptyResult` - If an existing command would be emptied and the policy
///   is `Reject`
pub fn upsert_command<I, S>(
    table: &mut CommandTable,
    raw_name: &str,
    raw: I,
    policy: EmptySavePolicy,
) -> Result<UpsertOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let name = CommandName::parse(raw_name)?;
    let lines = normalize_responses(raw);

    let Some(already_empty) = table.get(name.as_str()).map(Command::is_empty) else {
        table.insert(Command::with_responses(name, lines));
        return Ok(UpsertOutcome::Created);
    };

    // Nothing to lose: an empty command stays empty
    if lines.is_empty() && already_empty {
        return Ok(UpsertOutcome::Replaced);
    }

    match save_responses(table, name.as_str(), lines, policy)? {
        SaveOutcome::Saved { .. } => Ok(UpsertOutcome::Replaced),
        SaveOutcome::Deleted => Ok(UpsertOutcome::Deleted),
    }
}

/// Delete a command
///
/// Returns the removed command.
///
/// # Errors
/// * `NotFound` - If the command does not exist (including a second delete)
pub fn delete_command(table: &mut CommandTable, name: &str) -> Result<Command> {
    table.remove(name).ok_or_else(|| CommandError::NotFound {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_get_is_empty() {
        let mut table = CommandTable::new();
        add_command(&mut table, "greet").unwrap();

        let cmd = get_command(&table, "greet").unwrap();
        assert!(cmd.responses().is_empty());
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut table = CommandTable::new();
        add_command(&mut table, "hello").unwrap();

        let err = add_command(&mut table, "hello").unwrap_err();
        assert_eq!(
            err,
            CommandError::AlreadyExists {
                name: "hello".to_string()
            }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_duplicate_after_trim_fails() {
        let mut table = CommandTable::new();
        add_command(&mut table, "hello").unwrap();
        assert!(add_command(&mut table, "  hello  ").is_err());
    }

    #[test]
    fn test_save_missing_command_creates_nothing() {
        let mut table = CommandTable::new();
        let err = save_responses(&mut table, "ghost", ["hi"], EmptySavePolicy::Reject)
            .unwrap_err();

        assert!(matches!(err, CommandError::NotFound { .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn test_save_all_blank_rejected_keeps_prior() {
        let mut table = CommandTable::new();
        add_command(&mut table, "greet").unwrap();
        save_responses(&mut table, "greet", ["hi"], EmptySavePolicy::Reject).unwrap();

        let err = save_responses(&mut table, "greet", ["", "  ", ""], EmptySavePolicy::Reject)
            .unwrap_err();

        assert!(matches!(err, CommandError::EmptyResult { .. }));
        assert_eq!(get_command(&table, "greet").unwrap().responses(), ["hi"]);
    }

    #[test]
    fn test_save_all_blank_with_delete_policy_removes() {
        let mut table = CommandTable::new();
        add_command(&mut table, "greet").unwrap();

        let outcome =
            save_responses(&mut table, "greet", ["  "], EmptySavePolicy::Delete).unwrap();

        assert_eq!(outcome, SaveOutcome::Deleted);
        assert!(!table.contains("greet"));
    }

    #[test]
    fn test_save_is_full_replace_in_submitted_order() {
        let mut table = CommandTable::new();
        add_command(&mut table, "faq").unwrap();
        save_responses(&mut table, "faq", ["one", "two", "three"], EmptySavePolicy::Reject)
            .unwrap();

        // Drag-reordered and one line removed
        let outcome =
            save_responses(&mut table, "faq", ["three", "one"], EmptySavePolicy::Reject).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved { count: 2 });
        assert_eq!(get_command(&table, "faq").unwrap().responses(), ["three", "one"]);
    }

    #[test]
    fn test_delete_twice() {
        let mut table = CommandTable::new();
        add_command(&mut table, "bye").unwrap();

        delete_command(&mut table, "bye").unwrap();
        let err = delete_command(&mut table, "bye").unwrap_err();

        assert!(matches!(err, CommandError::NotFound { .. }));
    }

    #[test]
    fn test_upsert_reports_new_vs_existing() {
        let mut table = CommandTable::new();
        let policy = EmptySavePolicy::Reject;
        assert_eq!(
            upsert_command(&mut table, "a", ["x"], policy).unwrap(),
            UpsertOutcome::Created
        );
        assert_eq!(
            upsert_command(&mut table, "a", ["y"], policy).unwrap(),
            UpsertOutcome::Replaced
        );
        assert_eq!(get_command(&table, "a").unwrap().responses(), ["y"]);
    }

    #[test]
    fn test_upsert_new_name_with_blank_lines_is_created_empty() {
        let mut table = CommandTable::new();
        let outcome = upsert_command(&mut table, "a", ["  "], EmptySavePolicy::Reject).unwrap();

        assert_eq!(outcome, UpsertOutcome::Created);
        assert!(get_command(&table, "a").unwrap().is_empty());
    }

    #[test]
    fn test_upsert_blank_over_populated_rejected() {
        let mut table = CommandTable::new();
        add_command(&mut table, "a").unwrap();
        save_responses(&mut table, "a", ["keep"], EmptySavePolicy::Reject).unwrap();

        let err = upsert_command(&mut table, "a", [" "], EmptySavePolicy::Reject).unwrap_err();

        assert!(matches!(err, CommandError::EmptyResult { .. }));
        assert_eq!(get_command(&table, "a").unwrap().responses(), ["keep"]);
    }

    #[test]
    fn test_upsert_blank_over_empty_command_is_kept() {
        let mut table = CommandTable::new();
        add_command(&mut table, "a").unwrap();

        let outcome = upsert_command(&mut table, "a", [""], EmptySavePolicy::Reject).unwrap();

        assert_eq!(outcome, UpsertOutcome::Replaced);
        assert!(get_command(&table, "a").unwrap().is_empty());
    }

    #[test]
    fn test_upsert_blank_over_existing_deletes_under_delete_policy() {
        let mut table = CommandTable::new();
        add_command(&mut table, "a").unwrap();
        save_responses(&mut table, "a", ["x"], EmptySavePolicy::Delete).unwrap();

        let outcome = upsert_command(&mut table, "a", [""], EmptySavePolicy::Delete).unwrap();

        assert_eq!(outcome, UpsertOutcome::Deleted);
        assert!(!table.contains("a"));
    }

    #[test]
    fn test_create_with_lines_filters_them() {
        let mut table = CommandTable::new();
        create_command(&mut table, "faq", ["one", " ", " two "]).unwrap();

        assert_eq!(get_command(&table, "faq").unwrap().responses(), ["one", "two"]);
        assert!(create_command(&mut table, "faq", ["x"]).is_err());
    }
}
