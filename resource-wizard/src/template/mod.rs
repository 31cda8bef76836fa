//! Stub template substitution
//!
//! [`Substitutor::substitute`] runs two steps over a stub:
//!
//! 1. Every placeholder token from the table is replaced in a single
//!    left-to-right scan of the original text. Replacement values are never
//!    scanned again, so a derived name that happens to look like a token is
//!    left alone.
//! 2. The shared/account-specific marker rules from [`shared`] are applied
//!    in order.
//!
//! The result is returned verbatim. Running it twice is not a no-op in
//! general: step 2 consumes its markers.

pub mod placeholders;
pub mod shared;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::WizardConfig;
use crate::error::{Result, WizardError};
use crate::naming::{NameVariants, VariantKey};
use placeholders::{Placeholder, LEGACY_PLACEHOLDERS, PLACEHOLDERS, TOKEN_PREFIX};

/// Compiled alternation over one token table
struct TokenMatcher {
    regex: Regex,
    keys: HashMap<&'static str, VariantKey>,
    tokens: Vec<&'static str>,
}

impl TokenMatcher {
    fn new(tables: &[&[Placeholder]]) -> Self {
        let mut entries: Vec<&Placeholder> = tables.iter().flat_map(|t| t.iter()).collect();
        // Longest first so a token never loses to one of its own prefixes
        entries.sort_by(|a, b| b.token.len().cmp(&a.token.len()).then(a.token.cmp(b.token)));

        let pattern = entries
            .iter()
            .map(|p| regex::escape(p.token))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&pattern).unwrap_or_else(|e| unreachable!("escaped tokens: {e}"));

        Self {
            regex,
            keys: entries.iter().map(|p| (p.token, p.key)).collect(),
            tokens: entries.iter().map(|p| p.token).collect(),
        }
    }

    fn replace(&self, template: &str, variants: &NameVariants) -> String {
        self.regex
            .replace_all(template, |caps: &Captures<'_>| {
                let token = &caps[0];
                self.keys
                    .get(token)
                    .map_or_else(|| token.to_string(), |key| variants.get(*key).to_string())
            })
            .into_owned()
    }

    fn is_known(&self, candidate: &str) -> bool {
        self.tokens.iter().any(|token| candidate.starts_with(token))
    }
}

static CURRENT: Lazy<TokenMatcher> = Lazy::new(|| TokenMatcher::new(&[PLACEHOLDERS]));

static WITH_LEGACY: Lazy<TokenMatcher> =
    Lazy::new(|| TokenMatcher::new(&[PLACEHOLDERS, LEGACY_PLACEHOLDERS]));

static TOKEN_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{TOKEN_PREFIX}[A-Z][A-Za-z]*"))
        .unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

/// Applies the placeholder table and the shared rules to stubs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substitutor {
    legacy: bool,
    strict: bool,
}

impl Substitutor {
    /// Lenient substitutor with the current table only
    #[must_use]
    pub const fn new() -> Self {
        Self {
            legacy: false,
            strict: false,
        }
    }

    /// Substitutor configured from `legacy_placeholders` and `strict_placeholders`
    #[must_use]
    pub const fn from_config(config: &WizardConfig) -> Self {
        Self {
            legacy: config.legacy_placeholders,
            strict: config.strict_placeholders,
        }
    }

    /// Also replace `DummyUS`, `DummyUP`, `DummyLS` and `DummyLP`
    #[must_use]
    pub const fn with_legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Reject unknown `Dummy*` tokens in [`Self::try_substitute`]
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn matcher(&self) -> &'static TokenMatcher {
        if self.legacy {
            &WITH_LEGACY
        } else {
            &CURRENT
        }
    }

    /// Step 1 only: replace placeholder tokens
    #[must_use]
    pub fn replace_placeholders(&self, template: &str, variants: &NameVariants) -> String {
        self.matcher().replace(template, variants)
    }

    /// Replace placeholders, then apply the shared or account-specific rules
    ///
    /// Never fails; unknown tokens pass through untouched.
    #[must_use]
    pub fn substitute(&self, template: &str, variants: &NameVariants, shared: bool) -> String {
        let replaced = self.replace_placeholders(template, variants);
        shared::apply(&replaced, shared)
    }

    /// [`Self::substitute`], failing first on unknown tokens when strict
    pub fn try_substitute(
        &self,
        template: &str,
        variants: &NameVariants,
        shared: bool,
    ) -> Result<String> {
        if self.strict {
            self.check_tokens(template)?;
        }
        Ok(self.substitute(template, variants, shared))
    }

    /// Fail on the first `Dummy*` token no table entry accounts for
    ///
    /// A token followed by more identifier characters (`DummyStudlySRequest`)
    /// counts as known.
    pub fn check_tokens(&self, template: &str) -> Result<()> {
        let matcher = self.matcher();
        match TOKEN_LIKE
            .find_iter(template)
            .find(|m| !matcher.is_known(m.as_str()))
        {
            Some(unknown) => Err(WizardError::UnknownPlaceholder {
                token: unknown.as_str().to_string(),
            }),
            None => Ok(()),
        }
    }
}
