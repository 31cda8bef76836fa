//! Form request validation rules
//!
//! A resource request validates differently on create and on update. The
//! trait only decides which rule set applies to an incoming method; checking
//! values against the rules belongs to the web framework.

use std::collections::BTreeMap;

use http::Method;

/// Field name to validation rules, e.g. `"name" => ["required", "max:255"]`
pub type Rules = BTreeMap<String, Vec<String>>;

/// Build a [`Rules`] map from string literals
#[must_use]
pub fn rules_from<'a>(entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>) -> Rules {
    entries
        .into_iter()
        .map(|(field, rules)| {
            (
                field.to_string(),
                rules.iter().map(|rule| (*rule).to_string()).collect(),
            )
        })
        .collect()
}

/// Validation contract of a resource request
pub trait FormRequest {
    /// Whether the current user may send this request
    fn authorize(&self) -> bool {
        true
    }

    /// Rules applied when creating
    fn store_rules(&self) -> Rules;

    /// Rules applied when updating
    fn update_rules(&self) -> Rules;

    /// Custom validation messages keyed by `field.rule`
    fn messages(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Rules for `method`
    ///
    /// `POST` selects the store rules, `PUT` and `PATCH` the update rules;
    /// every other method validates nothing.
    fn rules(&self, method: &Method) -> Rules {
        if *method == Method::POST {
            self.store_rules()
        } else if *method == Method::PUT || *method == Method::PATCH {
            self.update_rules()
        } else {
            Rules::new()
        }
    }
}
