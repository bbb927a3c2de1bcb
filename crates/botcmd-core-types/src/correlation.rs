//! Request correlation
//!
//! Every CLI invocation runs one store operation. Its `RequestId` is attached
//! to the request span and to any error printed, so a failed command can be
//! matched to its log lines.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Environment variable a caller may set to supply its own request id
pub const REQUEST_ID_ENV: &str = "BOTCMD_REQUEST_ID";

/// Identifier for one request, time-ordered when generated (UUIDv7)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Reuse an id handed in by the caller; blank input yields `None`
    pub fn from_external(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request context passed from the surface down to error reporting
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a process-level request
    ///
    /// Uses `BOTCMD_REQUEST_ID` when set, so a wrapping chat bot or script
    /// can correlate its own logs; otherwise generates a fresh id.
    pub fn from_env() -> Self {
        let request_id = std::env::var(REQUEST_ID_ENV)
            .ok()
            .and_then(|raw| RequestId::from_external(&raw))
            .unwrap_or_default();
        Self { request_id }
    }
}
