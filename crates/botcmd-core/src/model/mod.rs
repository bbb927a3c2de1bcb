//! Domain model for chatbot commands

pub mod command;

pub use command::{Command, CommandName, CommandSummary, ResponseLine};
