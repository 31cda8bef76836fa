//! `names`: show every derived name variant

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use resource_wizard::template::placeholders::PLACEHOLDERS;
use resource_wizard::{derive, NameVariants, WizardError};

/// Print the name variants and the placeholder each one fills
#[derive(Debug, Clone, Default, Args)]
pub struct NamesCommand {
    /// Resource name in any casing, singular or plural
    pub name: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl NamesCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn execute(&self) -> Result<()> {
        WizardError::ensure_name(&self.name)?;
        let names = derive(&self.name);

        if self.json {
            println!("{}", render_json(&names)?);
            return Ok(());
        }

        println!(
            "\n{} {}\n",
            style("Names for").cyan().bold(),
            style(&self.name).green().bold()
        );
        for (token, key, value) in rows(&names) {
            println!(
                "  {:<14} {:<20} {}",
                style(token).yellow(),
                style(key).dim(),
                value
            );
        }
        Ok(())
    }
}

/// `(token, variant key, value)` for every placeholder
fn rows(names: &NameVariants) -> Vec<(&'static str, String, &str)> {
    PLACEHOLDERS
        .iter()
        .map(|p| (p.token, p.key.to_string(), names.get(p.key)))
        .collect()
}

fn render_json(names: &NameVariants) -> Result<String> {
    serde_json::to_string_pretty(names).context("Failed to serialize names")
}
