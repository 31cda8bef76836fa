//! `build`: generate every file of a resource
//!
//! ```bash
//! resource-wizard build person
//! resource-wizard build "account setting" --shared --frontend
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use resource_wizard::scaffold::{Layout, PlanOptions, PlannedArtifact, ScaffoldPlan};
use resource_wizard::{derive, ResourceRegistry, Substitutor, WizardConfig, WizardError};

use crate::composer::{AutoloadOutcome, Composer};
use crate::discovery::is_registered;
use crate::scaffold::{ArtifactWriter, ResourceGenerator};
use crate::templates::StubStore;

/// Generate migration, model, factory, request and events for a resource
#[derive(Debug, Clone, Default, Args)]
pub struct BuildCommand {
    /// Resource name in any casing, singular or plural (e.g. `person`, `AccountSettings`)
    pub name: String,

    /// Generate a resource shared by all accounts
    #[arg(long)]
    pub shared: bool,

    /// Also generate the controller and the Vue/JS front end
    #[arg(long)]
    pub frontend: bool,

    /// Print the files that would be generated without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the duplicate class check
    #[arg(long)]
    pub force: bool,
}

/// What a build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Written (or, for a dry run, planned) files
    pub files: Vec<PathBuf>,
    /// Autoload result; `None` for a dry run
    pub autoload: Option<AutoloadOutcome>,
}

impl BuildCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, a class already exists, a stub
    /// cannot be rendered, or a file cannot be written. Files written before
    /// a write failure stay in place.
    pub fn execute(&self, config: &WizardConfig, registry: &ResourceRegistry) -> Result<BuildReport> {
        WizardError::ensure_name(&self.name)?;

        let names = derive(&self.name);
        let layout = Layout::from_config(config);
        let plan = ScaffoldPlan::build(
            &names,
            &layout,
            Local::now().naive_local(),
            PlanOptions {
                frontend: self.frontend,
            },
        );

        println!(
            "\n{} {} {}",
            style("Building").cyan().bold(),
            style(names.title_singular()).green().bold(),
            style(if self.shared { "(shared)" } else { "(account specific)" }).dim()
        );
        println!(
            "  {} {} / {}",
            style("names:").dim(),
            names.snake_singular(),
            names.snake_plural()
        );

        if self.dry_run {
            println!("\n{} {} files:", style("Would generate").yellow().bold(), plan.len());
            for artifact in &plan {
                println!(
                    "  {} {} ({})",
                    style("•").yellow(),
                    style(artifact.path().display()).dim(),
                    style(&artifact.kind).dim()
                );
            }
            return Ok(BuildReport {
                files: plan.iter().map(PlannedArtifact::path).collect(),
                autoload: None,
            });
        }

        let writer = ArtifactWriter::new(self.force);
        for artifact in &plan {
            writer
                .check(artifact)
                .with_context(|| format!("Refusing to generate the {}", artifact.kind))?;
        }

        let stubs = StubStore::from_config(config);
        let generator = ResourceGenerator::new(
            &stubs,
            Substitutor::from_config(config),
            &names,
            self.shared,
        );

        let progress = ProgressBar::new(plan.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .context("Failed to set progress style")?
                .progress_chars("=> "),
        );
        progress.enable_steady_tick(Duration::from_millis(100));

        let mut files = Vec::with_capacity(plan.len());
        for artifact in &plan {
            progress.set_message(artifact.kind.to_string());
            let file = generator
                .render(artifact)
                .with_context(|| format!("Failed to render the {}", artifact.kind))?;
            writer
                .write(&file)
                .with_context(|| format!("Failed to write the {}", artifact.kind))?;
            progress.inc(1);
            files.push(file);
        }
        progress.finish_and_clear();

        println!("\n{} {} files:", style("Generated").green().bold(), files.len());
        for file in &files {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        let autoload = Composer::new(&config.composer, &config.base_path).dump_autoload();
        report_autoload(&autoload);

        if !is_registered(registry, &names) {
            println!(
                "\n{} register it with {}",
                style("Not registered yet:").yellow(),
                style(format!("resource-wizard create \"{}\"", self.name)).cyan()
            );
        }

        Ok(BuildReport {
            files: files.into_iter().map(|file| file.path).collect(),
            autoload: Some(autoload),
        })
    }
}

/// Print the autoload outcome; failures are warnings only
pub(crate) fn report_autoload(outcome: &AutoloadOutcome) {
    match outcome {
        AutoloadOutcome::Regenerated => {
            println!("{} autoload files regenerated", style("✓").green());
        }
        AutoloadOutcome::Skipped => {}
        AutoloadOutcome::Unavailable(reason) => {
            println!(
                "{} could not run composer ({reason}); run {} yourself",
                style("warning:").yellow().bold(),
                style("composer dump-autoload").cyan()
            );
        }
        AutoloadOutcome::Failed(code) => {
            let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
            println!(
                "{} composer dump-autoload exited with {code}",
                style("warning:").yellow().bold()
            );
        }
    }
}
