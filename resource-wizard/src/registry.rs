//! Registered resources
//!
//! The registry is built once from configuration and passed by reference to
//! whatever needs it. Two names are the same resource when they derive the
//! same kebab-case singular, so `person`, `People` and `person.php`'s stem
//! all count once.

use std::collections::HashSet;

use crate::config::WizardConfig;
use crate::naming::derive;

/// Ordered, de-duplicated list of resource names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRegistry {
    resources: Vec<String>,
    keys: HashSet<String>,
}

/// Identity of a resource name; empty for names without letters or digits
fn resource_key(name: &str) -> String {
    derive(name).kebab_singular().to_string()
}

impl ResourceRegistry {
    /// Registry holding the configured `resources`
    #[must_use]
    pub fn from_config(config: &WizardConfig) -> Self {
        let mut registry = Self::default();
        registry.extend(config.resources.iter().map(String::as_str));
        registry
    }

    /// Add names, skipping blanks and resources already present
    pub fn extend<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.insert(name);
        }
    }

    /// Add one name as written; returns false when it was blank or the
    /// resource is already registered under any spelling
    pub fn insert(&mut self, name: &str) -> bool {
        let key = resource_key(name);
        if key.is_empty() || !self.keys.insert(key) {
            return false;
        }
        self.resources.push(name.trim().to_string());
        true
    }

    /// Registered names in registration order
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Whether the resource `name` refers to is registered, in any casing,
    /// separator style or number
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&resource_key(name))
    }

    /// Number of registered names
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(resources: &[&str]) -> WizardConfig {
        WizardConfig {
            resources: resources.iter().map(ToString::to_string).collect(),
            ..WizardConfig::default()
        }
    }

    #[test]
    fn test_from_config_keeps_order() {
        let registry = ResourceRegistry::from_config(&config_with(&["post", "person", "account-setting"]));
        assert_eq!(registry.resources(), ["post", "person", "account-setting"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_from_config_cleans_entries() {
        let registry = ResourceRegistry::from_config(&config_with(&[" post ", "", "   ", "post", "person"]));
        assert_eq!(registry.resources(), ["post", "person"]);
    }

    #[test]
    fn test_contains() {
        let registry =
            ResourceRegistry::from_config(&config_with(&["post", "account setting"]));
        assert!(registry.contains("post"));
        assert!(registry.contains(" post"));
        assert!(registry.contains("Posts"));
        assert!(registry.contains("account-settings"));
        assert!(registry.contains("AccountSetting"));
        assert!(!registry.contains("person"));
        assert!(!registry.contains("--"));
    }

    #[test]
    fn test_spellings_of_one_resource_count_once() {
        let registry = ResourceRegistry::from_config(&config_with(&[
            "person",
            "People",
            "account_setting",
            "Account Settings",
        ]));
        assert_eq!(registry.resources(), ["person", "account_setting"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert() {
        let mut registry = ResourceRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.insert("post"));
        assert!(!registry.insert("post"));
        assert!(!registry.insert(" "));
        assert!(!registry.insert("-_-"));
        assert!(!registry.insert("POSTS"));
        registry.extend(["person", "post"]);
        assert_eq!(registry.resources(), ["post", "person"]);
    }
}
