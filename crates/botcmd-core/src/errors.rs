use botcmd_core_types::RequestId;
use thiserror::Error;

/// Result type alias using CommandError
pub type Result<T> = std::result::Result<T, CommandError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code so the presentation layer can render
/// a specific message without parsing error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmdErrorKind {
    /// Command name is empty or whitespace-only
    InvalidName,
    /// `add` collided with an existing name
    AlreadyExists,
    /// Operation addressed a command that is not in the store
    NotFound,
    /// A save would leave the command with zero responses
    EmptyResult,
    /// Durable storage could not be read or written
    StorageUnavailable,
    /// A document handed to the store (legacy import, config file) is malformed
    InvalidInput,
}

impl CmdErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            CmdErrorKind::InvalidName => "ERR_INVALID_NAME",
            CmdErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            CmdErrorKind::NotFound => "ERR_NOT_FOUND",
            CmdErrorKind::EmptyResult => "ERR_EMPTY_RESULT",
            CmdErrorKind::StorageUnavailable => "ERR_STORAGE_UNAVAILABLE",
            CmdErrorKind::InvalidInput => "ERR_INVALID_INPUT",
        }
    }

    /// Whether a caller may reasonably retry the same request
    ///
    /// Every other kind is a deterministic outcome of the input and state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CmdErrorKind::StorageUnavailable)
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (operation, command name,
/// request id) for logs and user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdError {
    kind: CmdErrorKind,
    op: Option<String>,
    command: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl CmdError {
    /// Create a new error with the specified kind
    pub fn new(kind: CmdErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the command the operation addressed
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.command = Some(name.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> CmdErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl std::fmt::Display for CmdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for CmdError {}

// ========== End Error Facility ==========

/// Error taxonomy for command table operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Name is empty or whitespace-only after trimming
    #[error("Invalid command name: {reason}")]
    InvalidName { reason: String },

    /// A command with this exact name already exists
    #[error("Command already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Command not found: {name}")]
    NotFound { name: String },

    /// Every submitted response line was blank
    #[error("Command {name} would have no responses after removing blank lines")]
    EmptyResult { name: String },
}

impl CommandError {
    /// Get the facility kind for this error
    pub fn kind(&self) -> CmdErrorKind {
        match self {
            CommandError::InvalidName { .. } => CmdErrorKind::InvalidName,
            CommandError::AlreadyExists { .. } => CmdErrorKind::AlreadyExists,
            CommandError::NotFound { .. } => CmdErrorKind::NotFound,
            CommandError::EmptyResult { .. } => CmdErrorKind::EmptyResult,
        }
    }
}

impl From<CommandError> for CmdError {
    fn from(err: CommandError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            CommandError::InvalidName { .. } => CmdError::new(kind).with_message(message),
            CommandError::AlreadyExists { name }
            | CommandError::NotFound { name }
            | CommandError::EmptyResult { name } => {
                CmdError::new(kind).with_command(name).with_message(message)
            }
        }
    }
}
