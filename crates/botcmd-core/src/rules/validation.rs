use crate::errors::{CommandError, Result};

/// Normalize a raw command name
///
/// Leading and trailing whitespace is removed. Case is preserved, so
/// `Hello` and `hello` are distinct commands.
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
pub fn normalize_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::InvalidName {
            reason: "Command name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Filter raw response lines the way a save persists them
///
/// Each line is trimmed, lines that end up empty are dropped, and the
/// surviving lines keep their submitted order. The preview renderer calls
/// this same function so a preview always matches what a save stores.
pub fn normalize_responses<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
