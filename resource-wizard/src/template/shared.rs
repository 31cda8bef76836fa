//! Shared vs account-specific fragment selection
//!
//! Stubs mark account-scoped code with a fixed set of literal markers. A
//! shared resource comments that code out and pins the broadcast channel to
//! `'www'`; an account-specific resource keeps it and drops the constructor
//! flag.

/// Opens a block of account-scoped code
pub const REMOVE_START: &str = "// SharedRemoveStart";

/// Closes a block of account-scoped code
pub const REMOVE_END: &str = "// SharedRemoveEnd";

/// Controller constructor call carrying the shared flag
pub const SHARED_CONSTRUCTOR: &str = "parent::__construct(false); // Controller Shared";

/// Front-end channel lookup by account subdomain
pub const SUBDOMAIN: &str = "window.Laravel.subdomain";

/// Literal channel used by shared resources
pub const SHARED_CHANNEL: &str = "'www'";

/// Ordered (marker, replacement) pairs for shared resources
pub const SHARED_RULES: &[(&str, &str)] = &[
    (REMOVE_START, "/* Start - Code Removed for Shared Resources"),
    (REMOVE_END, " End */"),
    (SHARED_CONSTRUCTOR, "parent::__construct(true);"),
    (
        "domain_channel: window.Laravel.subdomain // Account dependent",
        "domain_channel: 'www' // Account independent",
    ),
    (
        "domain_channel: window.Laravel.subdomain, // Account dependent",
        "domain_channel: 'www', // Account independent",
    ),
    (
        "->where($this->getTableName() . \".service_account_id\", $this->getAccountID());",
        ";",
    ),
    (SUBDOMAIN, SHARED_CHANNEL),
];

/// Ordered (marker, replacement) pairs for account-specific resources
pub const ACCOUNT_RULES: &[(&str, &str)] = &[
    (REMOVE_START, "// Used only on Account Specific Resources"),
    (REMOVE_END, "// End of ASR code"),
    (SHARED_CONSTRUCTOR, "parent::__construct();"),
];

/// Rules for a shared flag value
#[must_use]
pub const fn rules(shared: bool) -> &'static [(&'static str, &'static str)] {
    if shared {
        SHARED_RULES
    } else {
        ACCOUNT_RULES
    }
}

/// Apply the rules for `shared` in order
#[must_use]
pub fn apply(text: &str, shared: bool) -> String {
    rules(shared)
        .iter()
        .fold(text.to_string(), |acc, (marker, replacement)| {
            acc.replace(marker, replacement)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUB: &str = "\
// SharedRemoveStart
use App\\Scopes\\Account;
// SharedRemoveEnd
parent::__construct(false); // Controller Shared
domain_channel: window.Laravel.subdomain // Account dependent
domain_channel: window.Laravel.subdomain, // Account dependent
const host = window.Laravel.subdomain + '.example.com';
";

    #[test]
    fn test_shared() {
        let out = apply(STUB, true);
        assert!(out.contains("/* Start - Code Removed for Shared Resources\n"));
        assert!(out.contains(" End */\n"));
        assert!(out.contains("parent::__construct(true);\n"));
        assert!(out.contains("domain_channel: 'www' // Account independent\n"));
        assert!(out.contains("domain_channel: 'www', // Account independent\n"));
        assert!(out.contains("const host = 'www' + '.example.com';"));
        assert!(!out.contains(SUBDOMAIN));
        assert!(!out.contains("false"));
    }

    #[test]
    fn test_account_specific() {
        let out = apply(STUB, false);
        assert!(out.contains("// Used only on Account Specific Resources\n"));
        assert!(out.contains("// End of ASR code\n"));
        assert!(out.contains("parent::__construct();\n"));
        assert!(!out.contains("parent::__construct(true)"));
        assert!(!out.contains("parent::__construct(false)"));
        assert!(out.contains(SUBDOMAIN));
    }

    #[test]
    fn test_where_clause_dropped_for_shared() {
        let stub = "$query\n    ->where($this->getTableName() . \".service_account_id\", $this->getAccountID());";
        assert_eq!(apply(stub, true), "$query\n    ;");
        assert_eq!(apply(stub, false), stub);
    }

    #[test]
    fn test_markers_are_consumed() {
        let once = apply(STUB, false);
        assert_eq!(apply(&once, false), once);
        assert!(!once.contains(REMOVE_START));
    }
}
