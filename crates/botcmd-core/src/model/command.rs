use serde::{Deserialize, Serialize};

use crate::errors::{CommandError, Result};
use crate::render::preview::render_preview;
use crate::rules::validation::{normalize_name, normalize_responses};

/// Validated command name
///
/// Never empty, never carries leading or trailing whitespace. Comparison is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandName(String);

impl CommandName {
    /// Parse a raw name, trimming surrounding whitespace
    ///
    /// # Errors
    /// * `InvalidName` - If the name is empty or whitespace-only
    pub fn parse(raw: &str) -> Result<Self> {
        normalize_name(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommandName {
    type Error = CommandError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CommandName> for String {
    fn from(name: CommandName) -> Self {
        name.0
    }
}

impl AsRef<str> for CommandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One response line, addressed by its position within the owning command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLine<'a> {
    /// 0-based position; the bot outputs lower indices first
    pub index: usize,
    pub text: &'a str,
}

/// A named command and its ordered response lines
///
/// Response lines are always trimmed and non-empty. A freshly added command
/// has no lines until its first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    name: CommandName,
    responses: Vec<String>,
}

impl Command {
    /// Create a command with no responses
    pub fn new(name: CommandName) -> Self {
        Self {
            name,
            responses: Vec::new(),
        }
    }

    /// Create a command from raw lines, applying the save filter
    pub fn with_responses<I, S>(name: CommandName, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name,
            responses: normalize_responses(raw),
        }
    }

    pub fn name(&self) -> &CommandName {
        &self.name
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Iterate response lines with their positions
    pub fn lines(&self) -> impl Iterator<Item = ResponseLine<'_>> {
        self.responses
            .iter()
            .enumerate()
            .map(|(index, text)| ResponseLine { index, text })
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Text the bot posts when this command is invoked
    ///
    /// Lines joined by `\n`; `None` while the command has no responses.
    pub fn render(&self) -> Option<String> {
        (!self.responses.is_empty()).then(|| self.responses.join("\n"))
    }

    /// Summary row for list surfaces
    pub fn summary(&self) -> CommandSummary {
        CommandSummary {
            name: self.name.clone(),
            response_count: self.responses.len(),
            preview: render_preview(&self.responses),
        }
    }

    /// Replace every response line; `lines` must already be normalized
    pub(crate) fn set_responses(&mut self, lines: Vec<String>) {
        self.responses = lines;
    }
}

/// Row shown by list surfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSummary {
    pub name: CommandName,
    pub response_count: usize,
    pub preview: String,
}
