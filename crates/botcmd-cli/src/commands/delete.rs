//! Delete command
//!
//! Usage: botcmd delete <NAME>

use botcmd_store::CommandStore;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

pub fn execute(store: &CommandStore, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    store.delete_command(&args.name)?;
    println!("✓ Command '{}' deleted", args.name);
    Ok(())
}
