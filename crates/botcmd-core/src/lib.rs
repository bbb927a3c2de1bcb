//! botcmd core - in-memory kernel for chatbot custom commands
//!
//! This crate owns everything about commands that does not touch disk:
//! - `CommandName` / `Command` model with name and response-line invariants
//! - `CommandTable`, the insertion-ordered snapshot of all commands
//! - CRUD operations and the `apply()` functional boundary
//! - The shared response filter and preview renderer
//! - Error and logging facilities used by the store and CLI

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod render;
pub mod rules;

pub use botcmd_core_types::schema;

pub use apply::apply;
pub use commands::{Change, Mutation};
pub use errors::{CmdError, CmdErrorKind, CommandError, Result};
pub use model::{Command, CommandName, CommandSummary, ResponseLine};
pub use ops::command_ops::{SaveOutcome, UpsertOutcome};
pub use ops::CommandTable;
pub use policy::EmptySavePolicy;
pub use render::preview::{render_preview, PREVIEW_PLACEHOLDER};
