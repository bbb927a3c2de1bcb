//! Save command
//!
//! Usage: botcmd save <NAME> [LINE]... | --from-file <PATH>
//!
//! Replaces the command's responses in the given order.

use std::path::PathBuf;

use botcmd_core::SaveOutcome;
use botcmd_store::CommandStore;
use clap::Args;

#[derive(Debug, Args)]
pub struct SaveArgs {
    pub name: String,

    /// Response lines, in output order
    #[arg(conflicts_with = "from_file")]
    pub lines: Vec<String>,

    /// Read response lines from a file, one per line
    #[arg(long)]
    pub from_file: Option<PathBuf>,
}

pub fn execute(store: &CommandStore, args: SaveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let lines = match &args.from_file {
        Some(path) => super::read_lines(path)?,
        None => args.lines,
    };

    match store.save_responses(&args.name, &lines)? {
        SaveOutcome::Saved { count } => {
            println!("✓ Command '{}' updated ({} responses)", args.name, count)
        }
        SaveOutcome::Deleted => println!("✓ Command '{}' had no responses and was deleted", args.name),
    }

    Ok(())
}
