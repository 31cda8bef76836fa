//! Stub template store
//!
//! Stubs are looked up by name (`Database/Model.php`). A file named
//! `{name}.stub` in the configured override directory wins over the built-in
//! copy, so projects can customize any stub without touching the rest.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use resource_wizard::{Result, WizardConfig, WizardError};

pub mod stubs;

/// Extension of stub files in the override directory
pub const STUB_EXTENSION: &str = "stub";

/// Where a stub was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// Override file on disk
    Override(PathBuf),
    /// Compiled into the binary
    Builtin,
}

/// Resolves stub names to template text
#[derive(Debug, Clone, Default)]
pub struct StubStore {
    override_dir: Option<PathBuf>,
}

impl StubStore {
    /// Store with an optional override directory
    #[must_use]
    pub const fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    /// Store using `paths.stubs` from the configuration
    #[must_use]
    pub fn from_config(config: &WizardConfig) -> Self {
        Self::new(config.stub_dir())
    }

    /// Override directory, if any
    #[must_use]
    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Names of all built-in stubs
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        stubs::STUBS.iter().map(|(name, _)| *name)
    }

    /// Built-in text of `name`
    #[must_use]
    pub fn builtin(name: &str) -> Option<&'static str> {
        stubs::STUBS
            .iter()
            .find(|(stub, _)| *stub == name)
            .map(|(_, text)| *text)
    }

    /// Path an override for `name` would have
    #[must_use]
    pub fn override_path(&self, name: &str) -> Option<PathBuf> {
        self.override_dir
            .as_ref()
            .map(|dir| dir.join(format!("{name}.{STUB_EXTENSION}")))
    }

    /// Where `name` would be loaded from, or `None` when it does not exist
    #[must_use]
    pub fn source(&self, name: &str) -> Option<StubSource> {
        match self.override_path(name) {
            Some(path) if path.is_file() => Some(StubSource::Override(path)),
            _ => Self::builtin(name).map(|_| StubSource::Builtin),
        }
    }

    /// Load the text of `name`
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::TemplateRead`] when the override cannot be read
    /// or the stub does not exist.
    pub fn load(&self, name: &str) -> Result<Cow<'static, str>> {
        match self.source(name) {
            Some(StubSource::Override(path)) => {
                tracing::debug!(stub = name, path = %path.display(), "using stub override");
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| WizardError::TemplateRead { path, source })
            }
            Some(StubSource::Builtin) => Self::builtin(name).map(Cow::Borrowed).ok_or_else(|| {
                WizardError::TemplateRead {
                    path: PathBuf::from(name),
                    source: io::Error::new(io::ErrorKind::NotFound, "stub not found"),
                }
            }),
            None => Err(WizardError::TemplateRead {
                path: self
                    .override_path(name)
                    .unwrap_or_else(|| PathBuf::from(name)),
                source: io::Error::new(io::ErrorKind::NotFound, "stub not found"),
            }),
        }
    }
}
