//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plinth - atomic deployment of immutable filesystem trees
#[derive(Parser, Debug)]
#[command(name = "plinth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Store root directory
    #[arg(
        long,
        global = true,
        env = "PLINTH_STORE",
        default_value = "/var/lib/plinth"
    )]
    pub store: PathBuf,

    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the store skeleton and an empty object repository
    Init,

    /// Import a directory tree into the object repository
    Import {
        /// Directory to import
        source: PathBuf,

        /// Ref name to point at the imported commit
        #[arg(long = "ref", value_name = "NAME")]
        reference: Option<String>,
    },

    /// Stage a revision as a new deployment and make it active
    Deploy {
        /// Target name the deployment belongs to
        target: String,

        /// Revision to deploy (ref name or commit id); defaults to the
        /// target name
        revision: Option<String>,

        /// Re-create the deployment even if it already exists
        #[arg(short, long)]
        force: bool,

        /// Skip the post-activation kernel integration step
        #[arg(long)]
        no_kernel: bool,
    },

    /// Show the active and rollback deployments
    Status,
}
