//! Placeholder token tables
//!
//! Tokens are `Dummy` + case name + `S` (singular) or `P` (plural), e.g.
//! `DummyStudlyS` or `DummyKebabP`. `Text` is the lower title case.

use crate::naming::{TextCase, VariantKey};

/// Prefix shared by every placeholder token
pub const TOKEN_PREFIX: &str = "Dummy";

/// One placeholder token and the variant it resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Literal token as it appears in stubs
    pub token: &'static str,
    /// Variant substituted for it
    pub key: VariantKey,
}

const fn singular(token: &'static str, case: TextCase) -> Placeholder {
    Placeholder {
        token,
        key: VariantKey::singular(case),
    }
}

const fn plural(token: &'static str, case: TextCase) -> Placeholder {
    Placeholder {
        token,
        key: VariantKey::plural(case),
    }
}

/// Current placeholder table
pub const PLACEHOLDERS: &[Placeholder] = &[
    singular("DummyCamelS", TextCase::Camel),
    plural("DummyCamelP", TextCase::Camel),
    singular("DummyKebabS", TextCase::Kebab),
    plural("DummyKebabP", TextCase::Kebab),
    singular("DummySlugS", TextCase::Slug),
    plural("DummySlugP", TextCase::Slug),
    singular("DummySnakeS", TextCase::Snake),
    plural("DummySnakeP", TextCase::Snake),
    singular("DummyStudlyS", TextCase::Studly),
    plural("DummyStudlyP", TextCase::Studly),
    singular("DummyTitleS", TextCase::Title),
    plural("DummyTitleP", TextCase::Title),
    singular("DummyTextS", TextCase::LowerTitle),
    plural("DummyTextP", TextCase::LowerTitle),
];

/// Four-token table used by older stubs (U = studly, L = snake)
pub const LEGACY_PLACEHOLDERS: &[Placeholder] = &[
    singular("DummyUS", TextCase::Studly),
    plural("DummyUP", TextCase::Studly),
    singular("DummyLS", TextCase::Snake),
    plural("DummyLP", TextCase::Snake),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique() {
        let all: Vec<_> = PLACEHOLDERS.iter().chain(LEGACY_PLACEHOLDERS).map(|p| p.token).collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_every_variant_has_a_token() {
        let keys: HashSet<_> = PLACEHOLDERS.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), 14);
    }

    #[test]
    fn test_tokens_use_prefix() {
        assert!(PLACEHOLDERS
            .iter()
            .chain(LEGACY_PLACEHOLDERS)
            .all(|p| p.token.starts_with(TOKEN_PREFIX)));
    }
}
