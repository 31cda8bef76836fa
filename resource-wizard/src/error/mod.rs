//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = WizardError> = std::result::Result<T, E>;

/// Scaffolding error type
///
/// Name derivation and substitution never fail on their own; only strict
/// mode and the I/O performed by callers produce these.
#[derive(Debug, Error)]
pub enum WizardError {
    /// Caller rejected the resource name before invoking the core
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Template contains a placeholder-looking token missing from the table
    #[error("Unknown placeholder `{token}` in template")]
    UnknownPlaceholder {
        /// The unrecognized token
        token: String,
    },

    /// Stub template could not be read
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        /// Stub location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Generated file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        /// Target location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A class with the same name already exists in the target directory
    #[error("{name} already exists in {}", path.display())]
    DuplicateArtifact {
        /// Class name that collides
        name: String,
        /// File declaring it
        path: PathBuf,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<figment::Error> for WizardError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl WizardError {
    /// Reject a name with no letters or digits
    ///
    /// The core accepts such names and derives empty variants; commands call
    /// this first so users get a message instead of files named `.php`.
    pub fn ensure_name(raw: &str) -> Result<()> {
        if crate::naming::canonicalize(raw).is_empty() {
            return Err(Self::InvalidInput(
                "resource name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_name() {
        assert!(WizardError::ensure_name("person").is_ok());
        assert!(matches!(
            WizardError::ensure_name("   "),
            Err(WizardError::InvalidInput(_))
        ));
        for raw in ["--", "_", "  -_. ", "!?"] {
            assert!(WizardError::ensure_name(raw).is_err(), "input {raw:?}");
        }
        assert!(WizardError::ensure_name("-post-").is_ok());
    }

    #[test]
    fn test_duplicate_message() {
        let err = WizardError::DuplicateArtifact {
            name: "Person".to_string(),
            path: PathBuf::from("app/Models/Person.php"),
        };
        assert_eq!(err.to_string(), "Person already exists in app/Models/Person.php");
    }
}
