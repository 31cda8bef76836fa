//! Discovery of resource entries written by `create`

use std::path::Path;

use resource_wizard::{NameVariants, ResourceRegistry};
use walkdir::WalkDir;

/// Stems of the `*.php` entries directly inside `dir`, sorted
///
/// A missing directory yields no entries.
#[must_use]
pub fn entry_stems(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "php"))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(ToString::to_string)
        })
        .collect()
}

/// Add entries found in `dir` that the registry does not already name
///
/// A configured `account setting` and an `account-setting.php` entry are the
/// same resource and count once. Returns how many were added.
pub fn discover(registry: &mut ResourceRegistry, dir: &Path) -> usize {
    let added = entry_stems(dir)
        .into_iter()
        .filter(|stem| registry.insert(stem))
        .count();

    tracing::debug!(dir = %dir.display(), added, "discovered resource entries");
    added
}

/// Whether the registry names the resource `names` was derived from
#[must_use]
pub fn is_registered(registry: &ResourceRegistry, names: &NameVariants) -> bool {
    registry.contains(names.kebab_singular())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_wizard::{derive, WizardConfig};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entry_stems() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("post.php"), "<?php return [];").unwrap();
        fs::write(dir.path().join("account-setting.php"), "<?php return [];").unwrap();
        fs::write(dir.path().join("README.md"), "notes").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/person.php"), "<?php return [];").unwrap();

        assert_eq!(entry_stems(dir.path()), vec!["account-setting", "post"]);
        assert!(entry_stems(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_discover_skips_configured_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("account-setting.php"), "").unwrap();
        fs::write(dir.path().join("post.php"), "").unwrap();

        let config = WizardConfig {
            resources: vec!["account setting".to_string()],
            ..WizardConfig::default()
        };
        let mut registry = ResourceRegistry::from_config(&config);

        assert_eq!(discover(&mut registry, dir.path()), 1);
        assert_eq!(registry.resources(), ["account setting", "post"]);
        assert_eq!(discover(&mut registry, dir.path()), 0);
    }

    #[test]
    fn test_is_registered_ignores_form() {
        let config = WizardConfig {
            resources: vec!["Account Settings".to_string()],
            ..WizardConfig::default()
        };
        let registry = ResourceRegistry::from_config(&config);
        assert!(is_registered(&registry, &derive("account_setting")));
        assert!(!is_registered(&registry, &derive("account")));
    }
}
