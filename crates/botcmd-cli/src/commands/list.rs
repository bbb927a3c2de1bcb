//! List command
//!
//! Usage: botcmd list [--filter <TEXT>]

use botcmd_store::CommandStore;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show commands whose name contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
}

/// Execute list command
///
/// One tab-separated row per command: name, response count, first line.
pub fn execute(store: &CommandStore, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let needle = args.filter.map(|f| f.to_lowercase());
    let snapshot = store.list_commands()?;

    for summary in snapshot.summaries() {
        if let Some(needle) = &needle {
            if !summary.name.as_str().to_lowercase().contains(needle) {
                continue;
            }
        }
        let first = summary.preview.lines().next().unwrap_or_default();
        println!("{}\t{}\t{}", summary.name, summary.response_count, first);
    }

    Ok(())
}
