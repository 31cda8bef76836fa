//! `create`: register a resource

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use resource_wizard::scaffold::{Layout, ScaffoldPlan};
use resource_wizard::{derive, ResourceRegistry, Substitutor, WizardConfig, WizardError};

use super::build::report_autoload;
use crate::composer::Composer;
use crate::discovery::is_registered;
use crate::scaffold::{ArtifactWriter, ResourceGenerator};
use crate::templates::StubStore;

/// Write the registration entry `config/resources/{name}.php`
#[derive(Debug, Clone, Default, Args)]
pub struct CreateCommand {
    /// Resource name in any casing, singular or plural
    pub name: String,

    /// Overwrite an existing entry
    #[arg(long)]
    pub force: bool,
}

impl CreateCommand {
    /// Execute the command, returning the entry path
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the entry already exists and
    /// `--force` is not set, or the file cannot be written.
    pub fn execute(&self, config: &WizardConfig, registry: &ResourceRegistry) -> Result<PathBuf> {
        WizardError::ensure_name(&self.name)?;

        let names = derive(&self.name);
        let entry = ScaffoldPlan::resource_entry(&names, &Layout::from_config(config));
        let path = entry.path();

        println!(
            "\n{} {}",
            style("Registering").cyan().bold(),
            style(names.title_singular()).green().bold()
        );

        if path.exists() && !self.force {
            anyhow::bail!(
                "Resource entry already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        if is_registered(registry, &names) {
            println!("  {} already registered", style("note:").dim());
        }

        let stubs = StubStore::from_config(config);
        let generator = ResourceGenerator::new(&stubs, Substitutor::from_config(config), &names, false);
        let file = generator
            .render(&entry)
            .context("Failed to render the resource entry")?;
        ArtifactWriter::new(self.force)
            .write(&file)
            .context("Failed to write the resource entry")?;

        println!("  {} {}", style("✓").green(), style(path.display()).dim());

        report_autoload(&Composer::new(&config.composer, &config.base_path).dump_autoload());

        Ok(path)
    }
}
