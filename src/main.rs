//! Plinth CLI - atomic deployment of immutable filesystem trees
//!
//! Usage: plinth [--store DIR] [--json] <COMMAND>
//!
//! Commands:
//!   init    Create the store skeleton and an empty object repository
//!   import  Import a directory tree into the object repository
//!   deploy  Stage a revision as a new deployment and make it active
//!   status  Show the active and rollback deployments

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.store, cli.json),
        Commands::Import { source, reference } => {
            commands::cmd_import(&cli.store, &source, reference.as_deref(), cli.json)
        }
        Commands::Deploy {
            target,
            revision,
            force,
            no_kernel,
        } => commands::cmd_deploy(
            &cli.store,
            &target,
            revision.as_deref(),
            force,
            no_kernel,
            cli.json,
        ),
        Commands::Status => commands::cmd_status(&cli.store, cli.json),
    }
}
