//! Show command
//!
//! Usage: botcmd show <NAME> [--numbered] [--times]
//!
//! Prints the text the bot posts for the command.

use botcmd_core::ops::command_ops::get_command;
use botcmd_core::CmdError;
use botcmd_store::CommandStore;
use chrono::DateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,

    /// Prefix each line with its 0-based position
    #[arg(long)]
    pub numbered: bool,

    /// Also print when the command was created and last written
    #[arg(long)]
    pub times: bool,
}

pub fn execute(store: &CommandStore, args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = store.list_commands()?;
    let command = get_command(&snapshot, &args.name)
        .map_err(|e| CmdError::from(e).with_op("show"))?;

    if args.numbered {
        for line in command.lines() {
            println!("{}: {}", line.index, line.text);
        }
    } else if let Some(text) = command.render() {
        println!("{}", text);
    }

    if args.times {
        let ts = store.timestamps(command.name().as_str())?;
        println!("created: {}", format_time(ts.created_at));
        println!("updated: {}", format_time(ts.updated_at));
    }

    Ok(())
}

fn format_time(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}
