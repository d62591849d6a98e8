use clap::{Parser, Subcommand};
use git_anchors::commands::*;
use git_anchors::core::print_error;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-anchors")]
#[command(about = "Register backup anchor folders and resolve which git remotes point into them")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Use this folder for the settings file instead of the per-user default
    #[arg(long, global = true, value_name = "DIR")]
    settings_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registered anchors
    List,
    /// Register a folder as a named anchor (creates the folder if absent)
    Add {
        /// Anchor name (3-30 chars, identifier segments joined by -, _ or .)
        name: String,
        /// The folder to register as anchor
        folder: String,
    },
    /// Unregister an anchor (its folder stays on disk)
    Remove {
        /// Anchor name
        name: String,
    },
    /// Show which remotes of the enclosing repository point into anchors
    Resolve {
        /// Only consider targets with this access mode ("fetch" or "push")
        #[arg(long)]
        mode: Option<String>,
        /// Witness folder inside the repository (default: current folder)
        folder: Option<PathBuf>,
    },
    /// Create a bare repository inside a registered anchor's folder
    InitBare {
        /// Anchor name
        anchor: String,
        /// Name of the bare repository folder to create (e.g. "proj.git")
        repo_name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let settings_dir = cli.settings_dir;
    let outcome = match cli.command {
        Commands::List => execute_list(settings_dir),
        Commands::Add { name, folder } => execute_add(settings_dir, &name, &folder),
        Commands::Remove { name } => execute_remove(settings_dir, &name),
        Commands::Resolve { mode, folder } => {
            execute_resolve(settings_dir, mode.as_deref(), folder)
        }
        Commands::InitBare { anchor, repo_name } => {
            execute_init_bare(settings_dir, &anchor, &repo_name)
        }
    };

    if let Err(e) = outcome {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
