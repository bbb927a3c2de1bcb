//! botcmd CLI
//!
//! Terminal admin surface for chatbot custom commands.

use std::path::PathBuf;

use botcmd_core::logging_facility;
use botcmd_core::CmdError;
use botcmd_core_types::RequestContext;
use botcmd_store::{CommandStore, StoreConfig};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "botcmd")]
#[command(about = "Manage chatbot custom commands", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "botcmd.toml")]
    config: PathBuf,

    /// Database path (overrides `db_path` from the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List commands with response counts
    List(commands::list::ListArgs),
    /// Show a command's responses
    Show(commands::show::ShowArgs),
    /// Add a new command
    Add(commands::add::AddArgs),
    /// Replace a command's responses
    Save(commands::save::SaveArgs),
    /// Delete a command
    Delete(commands::delete::DeleteArgs),
    /// Preview what a save would store, without touching the store
    Preview(commands::preview::PreviewArgs),
    /// Import a legacy commands.json document
    Import(commands::legacy::ImportArgs),
    /// Export all commands as a legacy commands.json document
    Export(commands::legacy::ExportArgs),
}

fn main() {
    let cli = Cli::parse();
    let ctx = RequestContext::from_env();

    if let Err(e) = run(cli, &ctx) {
        let e: Box<dyn std::error::Error> = match e.downcast::<CmdError>() {
            Ok(cmd_err) => Box::new((*cmd_err).with_request_id(ctx.request_id.clone())),
            Err(other) => other,
        };
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, ctx: &RequestContext) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StoreConfig::load(&cli.config)?;
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }
    logging_facility::init(config.log_profile);

    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let _entered = span.enter();

    match cli.command {
        // Preview never opens the store
        Commands::Preview(args) => commands::preview::execute(args),
        command => {
            let store = CommandStore::open(&config)?;
            dispatch(&store, command)
        }
    }
}

fn dispatch(store: &CommandStore, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List(args) => commands::list::execute(store, args),
        Commands::Show(args) => commands::show::execute(store, args),
        Commands::Add(args) => commands::add::execute(store, args),
        Commands::Save(args) => commands::save::execute(store, args),
        Commands::Delete(args) => commands::delete::execute(store, args),
        Commands::Import(args) => commands::legacy::execute_import(store, args),
        Commands::Export(args) => commands::legacy::execute_export(store, args),
        Commands::Preview(args) => commands::preview::execute(args),
    }
}
