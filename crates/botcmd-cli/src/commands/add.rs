//! Add command
//!
//! Usage: botcmd add <NAME> [LINE]...

use botcmd_store::CommandStore;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    pub name: String,

    /// Initial response lines
    pub lines: Vec<String>,
}

/// Execute add command
///
/// The command and any initial lines are written together; lines that are
/// all blank leave the command empty.
pub fn execute(store: &CommandStore, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = store.add_command_with_responses(&args.name, &args.lines)?;

    println!("✓ Command '{}' added", name);
    Ok(())
}
