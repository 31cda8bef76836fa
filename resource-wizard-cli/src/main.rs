//! resource-wizard CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resource_wizard::scaffold::Layout;
use resource_wizard::{observability, ResourceRegistry, WizardConfig};
use resource_wizard_cli_lib::commands::{
    self, BuildCommand, CreateCommand, NamesCommand, StubsCommand,
};
use resource_wizard_cli_lib::discovery;

#[derive(Parser)]
#[command(name = "resource-wizard")]
#[command(version)]
#[command(about = "Scaffold Laravel resources from stub templates", long_about = None)]
struct Cli {
    /// Configuration file layered over the user and project files
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Laravel project root (overrides `base_path`)
    #[arg(long, global = true, value_name = "DIR")]
    base_path: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the files of a resource
    Build(BuildCommand),
    /// Register a resource under config/resources
    Create(CreateCommand),
    /// Show the name variants derived from a resource name
    Names(NamesCommand),
    /// List registered resources
    Resources,
    /// Manage stub templates
    Stubs {
        #[command(subcommand)]
        command: StubsCommand,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = WizardConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(base_path) = cli.base_path {
        config.base_path = base_path;
    }

    observability::init(&config.logging, cli.verbose)?;

    let mut registry = ResourceRegistry::from_config(&config);
    discovery::discover(&mut registry, &Layout::from_config(&config).resource_entries());

    match cli.command {
        Commands::Build(cmd) => {
            cmd.execute(&config, &registry)?;
        }
        Commands::Create(cmd) => {
            cmd.execute(&config, &registry)?;
        }
        Commands::Names(cmd) => cmd.execute()?,
        Commands::Resources => commands::resources::list(&registry)?,
        Commands::Stubs { command } => command.execute(&config)?,
        Commands::Config => commands::config::show(&config)?,
    }

    Ok(())
}
