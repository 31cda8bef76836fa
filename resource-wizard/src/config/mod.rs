//! Configuration management for resource-wizard
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `RESOURCE_WIZARD_` prefix,
//!    `__` for nesting)
//! 2. A file passed explicitly with `--config`
//! 3. `./resource-wizard.toml` (project)
//! 4. `~/.config/resource-wizard/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # resource-wizard.toml
//! base_path = "."
//! resources = ["person", "account setting"]
//!
//! [paths]
//! app = "app"
//! database = "database"
//! stubs = "./stubs"
//!
//! [composer]
//! enabled = true
//! binary = "composer"
//! ```
//!
//! The resulting [`WizardConfig`] is built once at startup and passed by
//! reference to whatever needs it.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "resource-wizard.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RESOURCE_WIZARD_";

/// Target directories, relative to `base_path` unless absolute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Application code (`app/`)
    pub app: PathBuf,

    /// Database code (`database/`)
    pub database: PathBuf,

    /// Front-end resources (`resources/`)
    pub resources: PathBuf,

    /// Configuration directory (`config/`)
    pub config: PathBuf,

    /// Directory with stub overrides; empty means built-in stubs only
    pub stubs: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            app: PathBuf::from("app"),
            database: PathBuf::from("database"),
            resources: PathBuf::from("resources"),
            config: PathBuf::from("config"),
            stubs: PathBuf::new(),
        }
    }
}

/// Autoload regeneration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerSettings {
    /// Run `dump-autoload` after generating files
    pub enabled: bool,

    /// Composer executable
    pub binary: String,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            binary: "composer".to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Complete resource-wizard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Laravel project root
    pub base_path: PathBuf,

    /// Also replace the four legacy tokens (`DummyUS`, `DummyUP`, `DummyLS`, `DummyLP`)
    pub legacy_placeholders: bool,

    /// Fail on unknown `Dummy*` tokens instead of leaving them alone
    pub strict_placeholders: bool,

    /// Registered resource names
    pub resources: Vec<String>,

    /// Directory layout
    pub paths: PathSettings,

    /// Autoload regeneration
    pub composer: ComposerSettings,

    /// Logging settings
    pub logging: LoggingSettings,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            legacy_placeholders: false,
            strict_placeholders: false,
            resources: Vec::new(),
            paths: PathSettings::default(),
            composer: ComposerSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl WizardConfig {
    /// Load configuration from the standard locations
    ///
    /// `explicit` is a file named on the command line; it must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(base_path = %config.base_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid configuration.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()?;
        Ok(config)
    }

    /// Get the recommended XDG config path
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join("resource-wizard").join("config.toml"),
        )
    }

    /// Resolve a configured directory against `base_path`
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if a value has no TOML representation.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Stub override directory, if one is configured
    #[must_use]
    pub fn stub_dir(&self) -> Option<PathBuf> {
        if self.paths.stubs.as_os_str().is_empty() {
            None
        } else {
            Some(self.resolve(&self.paths.stubs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert_eq!(config.base_path, PathBuf::from("."));
        assert!(!config.legacy_placeholders);
        assert!(!config.strict_placeholders);
        assert!(config.resources.is_empty());
        assert!(config.composer.enabled);
        assert_eq!(config.composer.binary, "composer");
    }

    #[test]
    fn test_path_defaults() {
        let paths = PathSettings::default();
        assert_eq!(paths.app, PathBuf::from("app"));
        assert_eq!(paths.database, PathBuf::from("database"));
        assert!(paths.stubs.as_os_str().is_empty());
    }

    #[test]
    fn test_from_toml_overrides() {
        let config = WizardConfig::from_toml_str(
            r#"
            base_path = "/srv/app"
            resources = ["person"]

            [paths]
            stubs = "stubs"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_path, PathBuf::from("/srv/app"));
        assert_eq!(config.resources, vec!["person"]);
        assert_eq!(config.paths.app, PathBuf::from("app"));
        assert_eq!(config.stub_dir(), Some(PathBuf::from("/srv/app/stubs")));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_resolve_keeps_absolute() {
        let config = WizardConfig::default();
        assert_eq!(config.resolve(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
        assert_eq!(config.resolve(Path::new("app")), PathBuf::from("./app"));
    }

    #[test]
    fn test_toml_rendering_loads_back() {
        let mut config = WizardConfig::default();
        config.resources = vec!["person".to_string()];
        config.composer.enabled = false;

        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[composer]"));
        assert_eq!(WizardConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_package_runtime_settings_are_ignored() {
        let config = WizardConfig::from_toml_str(
            r#"
            api-path = "resources/api"

            [database]
            connection = "pgsql"

            [users]
            table = "accounts"
            "#,
        )
        .unwrap();

        assert_eq!(config, WizardConfig::default());
        let rendered = config.to_toml_string().unwrap();
        assert!(!rendered.contains("[database]"));
        assert!(!rendered.contains("[users]"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = WizardConfig::from_toml_str("legacy_placeholders = \"nope\"");
        assert!(matches!(result, Err(crate::WizardError::Config(_))));
    }
}
