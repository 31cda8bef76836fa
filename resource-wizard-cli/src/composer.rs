//! Composer autoload regeneration

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use resource_wizard::config::ComposerSettings;

/// Result of one `dump-autoload` attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoloadOutcome {
    /// Autoload files were regenerated
    Regenerated,
    /// Disabled in configuration
    Skipped,
    /// The binary could not be started
    Unavailable(String),
    /// The binary ran and reported failure
    Failed(Option<i32>),
}

impl AutoloadOutcome {
    /// Whether the user should be warned
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Failed(_))
    }
}

/// Runs `composer dump-autoload` in the project root
#[derive(Debug, Clone)]
pub struct Composer {
    binary: String,
    enabled: bool,
    working_dir: PathBuf,
}

impl Composer {
    /// Runner for the project at `working_dir`
    #[must_use]
    pub fn new(settings: &ComposerSettings, working_dir: &Path) -> Self {
        Self {
            binary: settings.binary.clone(),
            enabled: settings.enabled,
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Regenerate the autoload files
    ///
    /// Never fails: a missing binary or a non-zero exit is reported in the
    /// outcome so generated files stay in place.
    #[must_use]
    pub fn dump_autoload(&self) -> AutoloadOutcome {
        if !self.enabled {
            return AutoloadOutcome::Skipped;
        }

        let status = Command::new(&self.binary)
            .arg("dump-autoload")
            .current_dir(&self.working_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {
                tracing::info!(binary = %self.binary, "autoload regenerated");
                AutoloadOutcome::Regenerated
            }
            Ok(status) => {
                tracing::warn!(binary = %self.binary, code = ?status.code(), "dump-autoload failed");
                AutoloadOutcome::Failed(status.code())
            }
            Err(err) => {
                tracing::warn!(binary = %self.binary, error = %err, "could not run composer");
                AutoloadOutcome::Unavailable(err.to_string())
            }
        }
    }
}
