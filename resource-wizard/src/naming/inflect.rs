//! English singular/plural inflection
//!
//! `Inflector` supplies the regular rules, but it strips the final `s` from
//! any word (`campus` becomes `campu`) and several of its suffix rules drop
//! letters (`heroes` becomes `her`). The tables and suffix rules here decide
//! every word ending in `s`, plus the `-o`, `-f`, `-fe`, `-ie`, `-um`, `-a`
//! and `-ice` endings, so a word and its plural always map onto each other.
//! Everything else goes through `Inflector`.

use inflector::Inflector;

/// Irregular pairs as (singular, plural), matched on the whole word
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("crisis", "crises"),
    ("diagnosis", "diagnoses"),
    ("hypothesis", "hypotheses"),
    ("parenthesis", "parentheses"),
    ("synopsis", "synopses"),
    ("thesis", "theses"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
];

/// Irregular pairs that also apply at the end of a compound (`salesperson`)
const IRREGULAR_SUFFIXES: &[(&str, &str)] = &[("person", "people"), ("child", "children")];

/// Words with identical singular and plural forms
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "fish",
    "sheep",
    "deer",
    "metadata",
    "feedback",
    "data",
    "media",
    "news",
    "series",
    "species",
    "analytics",
    "athletics",
    "chaos",
    "chess",
    "crossroads",
    "economics",
    "ethics",
    "gallows",
    "genetics",
    "gymnastics",
    "linguistics",
    "mathematics",
    "measles",
    "mumps",
    "physics",
    "tennis",
];

/// Singular words ending in `s` that no suffix rule recognises
const SINGULAR_WITH_S: &[&str] = &[
    "alias", "atlas", "bias", "canvas", "gas", "iris", "lens", "pancreas", "trellis",
];

/// Plurals of words ending in `u`
const PLURAL_US: &[&str] = &["emus", "gnus", "gurus", "haikus", "menus"];

/// Words ending in `o` that take `-es`
const O_ES: &[&str] = &["echo", "embargo", "hero", "potato", "tomato", "torpedo", "veto"];

/// Words ending in `f` whose plural ends in `-ves`
const F_VES: &[&str] = &[
    "calf", "dwarf", "elf", "half", "hoof", "leaf", "loaf", "scarf", "sheaf", "shelf", "thief",
    "wharf", "wolf",
];

/// Words ending in `fe` whose plural ends in `-ves`
const FE_VES: &[&str] = &["knife", "life", "midwife", "wife"];

/// Words ending in `ie`, whose `-ies` plural would otherwise singularize to `-y`
const IE_WORDS: &[&str] = &[
    "auntie", "birdie", "brownie", "calorie", "cookie", "genie", "goalie", "hippie", "hoodie",
    "lie", "movie", "newbie", "pie", "prairie", "rookie", "selfie", "smoothie", "tie", "zombie",
];

/// Words ending in `che`, whose plural would otherwise singularize to `-ch`
const CHE_WORDS: &[&str] = &["avalanche", "cache", "cliche", "headache", "moustache", "niche"];

/// Words ending in a consonant plus `use`, whose plural would otherwise
/// singularize to `-us`
const USE_WORDS: &[&str] = &[
    "abuse", "accuse", "amuse", "disuse", "excuse", "fuse", "misuse", "muse", "recluse", "refuse",
    "reuse", "ruse",
];

/// Words ending in `z` that double it before `-es`
const ZZ_WORDS: &[&str] = &["quiz", "whiz"];

fn is_uncountable(word: &str) -> bool {
    UNCOUNTABLE.contains(&word)
}

fn ends_with_vowel(word: &str) -> bool {
    word.ends_with(['a', 'e', 'i', 'o', 'u'])
}

/// The (singular, plural) pair `word` belongs to, keeping any compound prefix
fn irregular(word: &str) -> Option<(String, String)> {
    if let Some(&(singular, plural)) = IRREGULARS.iter().find(|(s, p)| *s == word || *p == word) {
        return Some((singular.to_string(), plural.to_string()));
    }
    IRREGULAR_SUFFIXES.iter().find_map(|&(singular, plural)| {
        let head = word
            .strip_suffix(plural)
            .or_else(|| word.strip_suffix(singular))?;
        Some((format!("{head}{singular}"), format!("{head}{plural}")))
    })
}

/// Whether a word ending in `s` is already singular
fn is_singular_with_s(word: &str) -> bool {
    word.ends_with("ss")
        || word.ends_with("sis")
        || word.ends_with("xis")
        || (word.ends_with("us") && !word.ends_with("ous") && !PLURAL_US.contains(&word))
        || SINGULAR_WITH_S.contains(&word)
}

/// Pluralize a single lower-case singular word
///
/// # Examples
///
/// ```
/// # use resource_wizard::naming::inflect::pluralize;
/// assert_eq!(pluralize("post"), "posts");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// assert_eq!(pluralize("people"), "people");
/// assert_eq!(pluralize("campus"), "campuses");
/// ```
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || is_uncountable(word) {
        return word.to_string();
    }
    if let Some((_, plural)) = irregular(word) {
        return plural;
    }
    if word.ends_with('s') {
        return word
            .strip_suffix("sis")
            .map_or_else(|| format!("{word}es"), |head| format!("{head}ses"));
    }

    let inflected = word.to_plural();
    // Inflector's own uncountable words come back unchanged
    if inflected == word {
        return inflected;
    }

    if O_ES.contains(&word) {
        return format!("{word}es");
    }
    let ves_head = if FE_VES.contains(&word) {
        word.strip_suffix("fe")
    } else if F_VES.contains(&word) {
        word.strip_suffix('f')
    } else {
        None
    };
    if let Some(head) = ves_head {
        return format!("{head}ves");
    }
    if ["o", "f", "fe", "ie", "um", "a", "ice", "ouse"]
        .iter()
        .any(|ending| word.ends_with(ending))
    {
        return format!("{word}s");
    }
    inflected
}

/// Singularize a single lower-case word
///
/// # Examples
///
/// ```
/// # use resource_wizard::naming::inflect::singularize;
/// assert_eq!(singularize("posts"), "post");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// assert_eq!(singularize("campus"), "campus");
/// assert_eq!(singularize("heroes"), "hero");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    if word.is_empty() || is_uncountable(word) {
        return word.to_string();
    }
    if let Some((singular, _)) = irregular(word) {
        return singular;
    }
    // Plurals without a final `s` are all irregular
    let Some(stem) = word.strip_suffix('s') else {
        return word.to_string();
    };
    if is_singular_with_s(word) {
        return word.to_string();
    }

    if let Some(base) = word.strip_suffix("ies").filter(|base| !base.is_empty()) {
        let with_ie = format!("{base}ie");
        return if IE_WORDS.contains(&with_ie.as_str()) {
            with_ie
        } else {
            format!("{base}y")
        };
    }
    if let Some(base) = word.strip_suffix("ves") {
        let with_fe = format!("{base}fe");
        let with_f = format!("{base}f");
        return if FE_VES.contains(&with_fe.as_str()) {
            with_fe
        } else if F_VES.contains(&with_f.as_str()) {
            with_f
        } else {
            stem.to_string()
        };
    }
    if let Some(singular) = word.strip_suffix("es").and_then(|base| strip_es(base, stem)) {
        return singular;
    }
    word.to_singular()
}

/// Singular of a word ending in `es`, given the word without `es` (`base`)
/// and without `s` (`stem`)
fn strip_es(base: &str, stem: &str) -> Option<String> {
    let singular = if O_ES.contains(&base) {
        base
    } else if base.ends_with('o') {
        stem
    } else if base.ends_with("ss") || base.ends_with('x') || base.ends_with("sh") {
        base
    } else if base.ends_with("ch") {
        if CHE_WORDS.contains(&stem) {
            stem
        } else {
            base
        }
    } else if let Some(before) = base.strip_suffix("us") {
        if before.is_empty() || ends_with_vowel(before) || USE_WORDS.contains(&stem) {
            stem
        } else {
            base
        }
    } else if base.ends_with('s') {
        if SINGULAR_WITH_S.contains(&base) {
            base
        } else {
            stem
        }
    } else if let Some(single) = base.strip_suffix('z').filter(|single| single.ends_with('z')) {
        if ZZ_WORDS.contains(&single) {
            single
        } else {
            base
        }
    } else if base.ends_with('z') {
        stem
    } else {
        return None;
    };
    Some(singular.to_string())
}
