//! wardrobe CLI - mutually-exclusive selector generator
//!
//! Usage: wardrobe [--scene <FILE>] [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   add      Append items to the selection
//!   remove   Remove the item at a position
//!   list     Show the selection
//!   update   Build and install the selector
//!   clean    Remove what update installed
//!   status   Compare selection and installed state
//!   import   Add items from a legacy path list

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wardrobe::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        if cli.json {
            let _ = ui::json::emit_event(&ui::json::events::ErrorEvent::new(
                command_name(&cli.command),
                format!("{err:#}"),
            ));
        } else {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise -v/-vv raise the default `warn` level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Add { paths } => commands::add::cmd_add(&cli.scene, paths, cli.json),
        Commands::Remove { position } => commands::remove::cmd_remove(&cli.scene, *position, cli.json),
        Commands::List => commands::list::cmd_list(&cli.scene, cli.json),
        Commands::Update { dry_run } => {
            commands::update::cmd_update(&cli.scene, *dry_run, cli.json, cli.verbose)
        }
        Commands::Clean { dry_run } => commands::clean::cmd_clean(&cli.scene, *dry_run, cli.json),
        Commands::Status => commands::status::cmd_status(&cli.scene, cli.json),
        Commands::Import { legacy } => commands::import::cmd_import(&cli.scene, legacy, cli.json),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Add { .. } => "add",
        Commands::Remove { .. } => "remove",
        Commands::List => "list",
        Commands::Update { .. } => "update",
        Commands::Clean { .. } => "clean",
        Commands::Status => "status",
        Commands::Import { .. } => "import",
    }
}
