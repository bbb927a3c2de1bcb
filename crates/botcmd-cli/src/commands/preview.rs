//! Preview command
//!
//! Usage: botcmd preview [LINE]... | --from-file <PATH>

use std::path::PathBuf;

use botcmd_core::render_preview;
use clap::Args;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[arg(conflicts_with = "from_file")]
    pub lines: Vec<String>,

    #[arg(long)]
    pub from_file: Option<PathBuf>,
}

pub fn execute(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let lines = match &args.from_file {
        Some(path) => super::read_lines(path)?,
        None => args.lines,
    };

    println!("{}", render_preview(&lines));
    Ok(())
}
