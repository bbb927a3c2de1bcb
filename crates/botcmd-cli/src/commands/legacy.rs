//! Legacy commands.json import/export
//!
//! Usage:
//!   botcmd import <PATH>
//!   botcmd export <PATH>

use std::path::PathBuf;

use botcmd_store::CommandStore;
use clap::Args;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a commands.json document
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination path; replaced atomically if it exists
    pub path: PathBuf,
}

pub fn execute_import(store: &CommandStore, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("Importing {}...", args.path.display());
    let report = store.import_legacy(&args.path)?;
    println!(
        "✓ Imported ({} added, {} replaced, {} deleted)",
        report.added, report.replaced, report.deleted
    );
    Ok(())
}

pub fn execute_export(store: &CommandStore, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let count = store.export_legacy(&args.path)?;
    println!("✓ Exported {} commands to {}", count, args.path.display());
    Ok(())
}
