//! Stub management commands
//!
//! - `list` - show every stub and whether it is overridden
//! - `export` - copy the built-in stubs into the override directory
//! - `diff` - compare an override with its built-in copy

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use resource_wizard::WizardConfig;
use similar::{ChangeTag, TextDiff};

use crate::templates::{StubSource, StubStore, STUB_EXTENSION};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "* ");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "  ");

/// Override directory used when `paths.stubs` is not configured
pub const DEFAULT_STUB_DIR: &str = "stubs/resource-wizard";

/// Stub management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StubsCommand {
    /// List all stubs and where each one is loaded from
    List {
        /// Show only overridden stubs
        #[arg(long)]
        customized: bool,
    },
    /// Write the built-in stubs to the override directory for editing
    Export {
        /// Target directory (default: `paths.stubs`, else `stubs/resource-wizard`)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Overwrite stubs that already exist
        #[arg(long)]
        force: bool,
    },
    /// Show how overridden stubs differ from the built-in ones
    Diff {
        /// Stub name (e.g. `Database/Model.php`)
        stub: Option<String>,
        /// Diff every overridden stub
        #[arg(long)]
        all: bool,
    },
}

impl StubsCommand {
    /// Execute the stubs command
    ///
    /// # Errors
    ///
    /// Returns an error if a stub cannot be read or written.
    pub fn execute(&self, config: &WizardConfig) -> Result<()> {
        let store = StubStore::from_config(config);
        match self {
            Self::List { customized } => {
                list(&store, *customized);
                Ok(())
            }
            Self::Export { dir, force } => {
                let dir = dir
                    .as_ref()
                    .map(|dir| config.resolve(dir))
                    .or_else(|| config.stub_dir())
                    .unwrap_or_else(|| config.resolve(Path::new(DEFAULT_STUB_DIR)));
                let written = export(&dir, *force)?;
                println!(
                    "\n{CHECK}Exported {} stubs to {}",
                    written.len(),
                    style(dir.display()).cyan()
                );
                if config.stub_dir().as_deref() != Some(dir.as_path()) {
                    println!(
                        "Set {} in resource-wizard.toml to use them",
                        style(format!("paths.stubs = \"{}\"", dir.display())).yellow()
                    );
                }
                Ok(())
            }
            Self::Diff { stub, all } => diff(&store, stub.as_deref(), *all),
        }
    }
}

fn list(store: &StubStore, customized_only: bool) {
    match store.override_dir() {
        Some(dir) => println!("Overrides: {}", style(dir.display()).cyan()),
        None => println!("Overrides: {}", style("none configured").dim()),
    }
    println!();

    let mut customized = 0;
    for name in StubStore::builtin_names() {
        match store.source(name) {
            Some(StubSource::Override(_)) => {
                customized += 1;
                println!("  {CUSTOM}{}", style(name).yellow());
            }
            _ if !customized_only => println!("  {DEFAULT}{}", style(name).dim()),
            _ => {}
        }
    }

    println!();
    println!(
        "{} customized, {} built-in",
        style(customized).yellow(),
        style(StubStore::builtin_names().count() - customized).dim()
    );
}

/// Write every built-in stub below `dir`, returning the written paths
///
/// Existing files are kept unless `force` is set.
pub fn export(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for name in StubStore::builtin_names() {
        let path = dir.join(format!("{name}.{STUB_EXTENSION}"));
        if path.exists() && !force {
            tracing::debug!(path = %path.display(), "keeping existing stub");
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let text = StubStore::builtin(name).unwrap_or_default();
        fs::write(&path, text)
            .with_context(|| format!("Failed to write stub: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn diff(store: &StubStore, stub: Option<&str>, all: bool) -> Result<()> {
    let names: Vec<&str> = if all {
        StubStore::builtin_names()
            .filter(|name| matches!(store.source(name), Some(StubSource::Override(_))))
            .collect()
    } else if let Some(name) = stub {
        vec![name]
    } else {
        anyhow::bail!("Please specify a stub name or use --all");
    };

    if names.is_empty() {
        println!("No customized stubs found.");
        return Ok(());
    }

    for name in names {
        let Some(builtin) = StubStore::builtin(name) else {
            anyhow::bail!("Unknown stub: {name}");
        };
        let Some(StubSource::Override(path)) = store.source(name) else {
            println!("{} is not customized", style(name).bold());
            continue;
        };
        let custom = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stub: {}", path.display()))?;

        println!("{}", style(name).bold());
        print!("{}", render_diff(builtin, &custom));
        println!();
    }
    Ok(())
}

/// Line diff from `builtin` to `custom`, styled for the terminal
fn render_diff(builtin: &str, custom: &str) -> String {
    let diff = TextDiff::from_lines(builtin, custom);
    diff.iter_all_changes()
        .map(|change| match change.tag() {
            ChangeTag::Delete => style(format!("-{change}")).red().to_string(),
            ChangeTag::Insert => style(format!("+{change}")).green().to_string(),
            ChangeTag::Equal => format!(" {change}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_all_stubs() {
        let dir = TempDir::new().unwrap();
        let written = export(dir.path(), false).unwrap();
        assert_eq!(written.len(), StubStore::builtin_names().count());
        assert!(dir.path().join("Database/Model.php.stub").is_file());
        assert!(dir.path().join("Js/dps_page.js.stub").is_file());

        let store = StubStore::new(Some(dir.path().to_path_buf()));
        assert_eq!(
            store.load("Events/Lock.php").unwrap(),
            StubStore::builtin("Events/Lock.php").unwrap()
        );
    }

    #[test]
    fn test_export_keeps_customized() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Database")).unwrap();
        fs::write(dir.path().join("Database/Model.php.stub"), "mine").unwrap();

        let written = export(dir.path(), false).unwrap();
        assert_eq!(written.len(), StubStore::builtin_names().count() - 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("Database/Model.php.stub")).unwrap(),
            "mine"
        );

        let forced = export(dir.path(), true).unwrap();
        assert_eq!(forced.len(), StubStore::builtin_names().count());
    }

    #[test]
    fn test_render_diff_marks_changes() {
        console::set_colors_enabled(false);
        let out = render_diff("a\nb\n", "a\nc\n");
        assert!(out.contains(" a\n"));
        assert!(out.contains("-b\n"));
        assert!(out.contains("+c\n"));
    }
}
