//! Name derivation
//!
//! [`derive`] maps one free-text resource name to every text variant the
//! stubs need: singular and plural forms, each in seven cases.
//!
//! Input is canonicalized once before anything else: punctuation becomes a
//! word separator, words are split at case and digit boundaries, lower-cased
//! and joined by single spaces. `" Foo Bar "`, `"foo_bar"`, `"foo-bar"` and
//! `"FooBar"` therefore all derive the same variants.
//!
//! Blank input derives empty strings for every variant.

pub mod inflect;

use std::fmt;

use convert_case::{Case, Casing};
use serde::Serialize;

/// Text case of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCase {
    /// `fooBar`
    Camel,
    /// `foo-bar`
    Kebab,
    /// `foo-bar` (kebab for ASCII input)
    Slug,
    /// `foo_bar`
    Snake,
    /// `FooBar`
    Studly,
    /// `Foo Bar`
    Title,
    /// `foo bar`
    LowerTitle,
}

impl TextCase {
    /// All cases in placeholder-table order
    pub const ALL: [Self; 7] = [
        Self::Camel,
        Self::Kebab,
        Self::Slug,
        Self::Snake,
        Self::Studly,
        Self::Title,
        Self::LowerTitle,
    ];

    /// Apply this case to a canonical (lower-case, space separated) name
    #[must_use]
    pub fn apply(self, canonical: &str) -> String {
        if canonical.is_empty() {
            return String::new();
        }
        match self {
            Self::Camel => canonical.to_case(Case::Camel),
            Self::Kebab | Self::Slug => canonical.to_case(Case::Kebab),
            Self::Snake => canonical.to_case(Case::Snake),
            Self::Studly => canonical.to_case(Case::Pascal),
            Self::Title => canonical.to_case(Case::Title),
            Self::LowerTitle => canonical.to_case(Case::Title).to_lowercase(),
        }
    }

    const fn key_prefix(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Slug => "slug",
            Self::Snake => "snake",
            Self::Studly => "studly",
            Self::Title => "title",
            Self::LowerTitle => "lowerTitle",
        }
    }
}

/// Singular or plural
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    /// One item
    Singular,
    /// Many items
    Plural,
}

/// Address of one variant inside [`NameVariants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantKey {
    /// Text case
    pub case: TextCase,
    /// Singular or plural
    pub number: GrammaticalNumber,
}

impl VariantKey {
    /// Build a key
    #[must_use]
    pub const fn new(case: TextCase, number: GrammaticalNumber) -> Self {
        Self { case, number }
    }

    /// Singular key for a case
    #[must_use]
    pub const fn singular(case: TextCase) -> Self {
        Self::new(case, GrammaticalNumber::Singular)
    }

    /// Plural key for a case
    #[must_use]
    pub const fn plural(case: TextCase) -> Self {
        Self::new(case, GrammaticalNumber::Plural)
    }
}

impl fmt::Display for VariantKey {
    /// Renders as `camelSingular`, `lowerTitlePlural`, ...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.number {
            GrammaticalNumber::Singular => "Singular",
            GrammaticalNumber::Plural => "Plural",
        };
        write!(f, "{}{suffix}", self.case.key_prefix())
    }
}

/// Every case of one grammatical form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseForms {
    /// `fooBar`
    pub camel: String,
    /// `foo-bar`
    pub kebab: String,
    /// `foo-bar`
    pub slug: String,
    /// `foo_bar`
    pub snake: String,
    /// `FooBar`
    pub studly: String,
    /// `Foo Bar`
    pub title: String,
    /// `foo bar`
    pub lower_title: String,
}

impl CaseForms {
    fn from_canonical(canonical: &str) -> Self {
        Self {
            camel: TextCase::Camel.apply(canonical),
            kebab: TextCase::Kebab.apply(canonical),
            slug: TextCase::Slug.apply(canonical),
            snake: TextCase::Snake.apply(canonical),
            studly: TextCase::Studly.apply(canonical),
            title: TextCase::Title.apply(canonical),
            lower_title: TextCase::LowerTitle.apply(canonical),
        }
    }

    fn get(&self, case: TextCase) -> &str {
        match case {
            TextCase::Camel => &self.camel,
            TextCase::Kebab => &self.kebab,
            TextCase::Slug => &self.slug,
            TextCase::Snake => &self.snake,
            TextCase::Studly => &self.studly,
            TextCase::Title => &self.title,
            TextCase::LowerTitle => &self.lower_title,
        }
    }
}

/// All derived variants of a resource name
///
/// Produced by [`derive`]; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    singular: CaseForms,
    plural: CaseForms,
}

impl NameVariants {
    /// Look up one variant
    #[must_use]
    pub fn get(&self, key: VariantKey) -> &str {
        match key.number {
            GrammaticalNumber::Singular => self.singular.get(key.case),
            GrammaticalNumber::Plural => self.plural.get(key.case),
        }
    }

    /// Every variant with its key, singular first
    pub fn iter(&self) -> impl Iterator<Item = (VariantKey, &str)> + '_ {
        [GrammaticalNumber::Singular, GrammaticalNumber::Plural]
            .into_iter()
            .flat_map(|number| TextCase::ALL.into_iter().map(move |case| VariantKey::new(case, number)))
            .map(|key| (key, self.get(key)))
    }

    /// True when derived from blank input
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.singular.snake.is_empty()
    }

    /// Singular forms
    #[must_use]
    pub const fn singular(&self) -> &CaseForms {
        &self.singular
    }

    /// Plural forms
    #[must_use]
    pub const fn plural(&self) -> &CaseForms {
        &self.plural
    }

    /// `accountSetting`
    #[must_use]
    pub fn camel_singular(&self) -> &str {
        &self.singular.camel
    }

    /// `accountSettings`
    #[must_use]
    pub fn camel_plural(&self) -> &str {
        &self.plural.camel
    }

    /// `account-setting`
    #[must_use]
    pub fn kebab_singular(&self) -> &str {
        &self.singular.kebab
    }

    /// `account-settings`
    #[must_use]
    pub fn kebab_plural(&self) -> &str {
        &self.plural.kebab
    }

    /// `account_setting`
    #[must_use]
    pub fn snake_singular(&self) -> &str {
        &self.singular.snake
    }

    /// `account_settings`
    #[must_use]
    pub fn snake_plural(&self) -> &str {
        &self.plural.snake
    }

    /// `AccountSetting`
    #[must_use]
    pub fn studly_singular(&self) -> &str {
        &self.singular.studly
    }

    /// `AccountSettings`
    #[must_use]
    pub fn studly_plural(&self) -> &str {
        &self.plural.studly
    }

    /// `Account Setting`
    #[must_use]
    pub fn title_singular(&self) -> &str {
        &self.singular.title
    }

    /// `Account Settings`
    #[must_use]
    pub fn title_plural(&self) -> &str {
        &self.plural.title
    }

    /// `account setting`
    #[must_use]
    pub fn lower_title_singular(&self) -> &str {
        &self.singular.lower_title
    }

    /// `account settings`
    #[must_use]
    pub fn lower_title_plural(&self) -> &str {
        &self.plural.lower_title
    }
}

/// Canonicalize raw input into lower-case words separated by single spaces
///
/// # Examples
///
/// ```
/// # use resource_wizard::naming::canonicalize;
/// assert_eq!(canonicalize(" Foo  Bar "), "foo bar");
/// assert_eq!(canonicalize("foo_bar"), "foo bar");
/// assert_eq!(canonicalize("FooBar"), "foo bar");
/// assert_eq!(canonicalize("foo.bar!"), "foo bar");
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    spaced
        .split_whitespace()
        .map(|token| token.to_case(Case::Lower))
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply `inflect` to the last word of a canonical name
///
/// A word the rules would reduce to nothing (`"s"`) is kept as is.
fn inflect_last_word(canonical: &str, inflect: fn(&str) -> String) -> String {
    let (head, last) = canonical
        .rsplit_once(' ')
        .map_or(("", canonical), |(head, last)| (head, last));
    let inflected = inflect(last);
    let last = if inflected.is_empty() { last } else { inflected.as_str() };

    if head.is_empty() {
        last.to_string()
    } else {
        format!("{head} {last}")
    }
}

/// Derive all name variants from a free-text resource name
///
/// The singular form singularizes the last word; the plural form pluralizes
/// the last word of that singular, so singular and plural input derive the
/// same record.
///
/// # Examples
///
/// ```
/// # use resource_wizard::naming::derive;
/// let names = derive("person");
/// assert_eq!(names.studly_singular(), "Person");
/// assert_eq!(names.studly_plural(), "People");
///
/// assert!(derive("   ").is_empty());
/// ```
#[must_use]
pub fn derive(raw: &str) -> NameVariants {
    let canonical = canonicalize(raw);
    let singular = inflect_last_word(&canonical, inflect::singularize);
    let plural = inflect_last_word(&singular, inflect::pluralize);

    tracing::debug!(raw, %singular, %plural, "derived resource names");

    NameVariants {
        singular: CaseForms::from_canonical(&singular),
        plural: CaseForms::from_canonical(&plural),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person() {
        let names = derive("person");
        assert_eq!(names.studly_singular(), "Person");
        assert_eq!(names.studly_plural(), "People");
        assert_eq!(names.snake_singular(), "person");
        assert_eq!(names.snake_plural(), "people");
    }

    #[test]
    fn test_account_setting() {
        let names = derive("Account Setting");
        assert_eq!(names.kebab_singular(), "account-setting");
        assert_eq!(names.kebab_plural(), "account-settings");
        assert_eq!(names.camel_singular(), "accountSetting");
        assert_eq!(names.camel_plural(), "accountSettings");
        assert_eq!(names.snake_plural(), "account_settings");
        assert_eq!(names.studly_plural(), "AccountSettings");
        assert_eq!(names.title_singular(), "Account Setting");
        assert_eq!(names.title_plural(), "Account Settings");
        assert_eq!(names.lower_title_singular(), "account setting");
        assert_eq!(names.lower_title_plural(), "account settings");
        assert_eq!(
            names.get(VariantKey::singular(TextCase::Slug)),
            "account-setting"
        );
    }

    #[test]
    fn test_equivalent_inputs() {
        let expected = derive("foo bar");
        for raw in [" Foo Bar ", "foo_bar", "foo-bar", "FooBar", "fooBar", "FOO  bar"] {
            assert_eq!(derive(raw), expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_plural_input_derives_same_record() {
        assert_eq!(derive("account settings"), derive("account setting"));
        assert_eq!(derive("People"), derive("person"));
        assert_eq!(derive("categories"), derive("category"));
    }

    #[test]
    fn test_singular_nouns_ending_in_s() {
        let names = derive("campus");
        assert_eq!(names.studly_singular(), "Campus");
        assert_eq!(names.studly_plural(), "Campuses");

        for (singular, plural) in [
            ("campus", "campuses"),
            ("canvas", "canvases"),
            ("gas", "gases"),
            ("bonus", "bonuses"),
            ("census", "censuses"),
            ("virus", "viruses"),
            ("hero", "heroes"),
            ("cookie", "cookies"),
            ("movie", "movies"),
            ("leaf", "leaves"),
            ("wife", "wives"),
            ("half", "halves"),
        ] {
            let names = derive(singular);
            assert_eq!(names.snake_singular(), singular);
            assert_eq!(names.snake_plural(), plural);
            assert_eq!(derive(plural), names, "input {plural:?}");
        }
    }

    #[test]
    fn test_blank_input() {
        for raw in ["", "   ", "--__--", "\t\n"] {
            let names = derive(raw);
            assert!(names.is_empty());
            assert!(names.iter().all(|(_, value)| value.is_empty()));
        }
    }

    #[test]
    fn test_variant_key_display() {
        assert_eq!(VariantKey::singular(TextCase::Camel).to_string(), "camelSingular");
        assert_eq!(
            VariantKey::plural(TextCase::LowerTitle).to_string(),
            "lowerTitlePlural"
        );
    }

    #[test]
    fn test_iter_covers_all_variants() {
        let names = derive("post");
        let collected: Vec<_> = names.iter().collect();
        assert_eq!(collected.len(), 14);
        assert_eq!(collected[0], (VariantKey::singular(TextCase::Camel), "post"));
        assert_eq!(collected[11], (VariantKey::plural(TextCase::Studly), "Posts"));
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let json = serde_json::to_value(derive("account setting")).unwrap();
        assert_eq!(json["singular"]["lowerTitle"], "account setting");
        assert_eq!(json["plural"]["studly"], "AccountSettings");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        const NAME: &str =
            "([a-z]{2,7} ){0,3}[bcdfghklmnprstvwz][aeiou][bdgkmpt](ss|us|o|x|ch|sh|y|f|fe|zz)?";

        proptest! {
            #[test]
            fn prop_camel_and_studly_shape(raw in NAME) {
                let names = derive(&raw);
                let camel = names.camel_singular();
                prop_assert!(camel.chars().next().unwrap().is_lowercase());
                prop_assert!(!camel.contains([' ', '-', '_']));
                prop_assert!(names.studly_singular().chars().next().unwrap().is_uppercase());
            }

            #[test]
            fn prop_kebab_of_studly_matches_kebab(raw in NAME) {
                let direct = derive(&raw);
                let via_studly = derive(direct.studly_singular());
                prop_assert_eq!(via_studly.kebab_singular(), direct.kebab_singular());
            }

            #[test]
            fn prop_plural_input_derives_same_record(raw in NAME) {
                let names = derive(&raw);
                prop_assert_eq!(derive(names.lower_title_plural()), names);
            }

            #[test]
            fn prop_deterministic(raw in "\\PC{0,40}") {
                prop_assert_eq!(derive(&raw), derive(&raw));
            }
        }
    }
}
