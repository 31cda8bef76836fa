//! resource-wizard: scaffolding core for Laravel resources
//!
//! Turns a free-text resource name into every naming variant a resource needs
//! and fills stub templates with them. The crate is I/O free apart from
//! configuration loading; writing files is left to the CLI.
//!
//! # Quick Start
//!
//! ```rust
//! use resource_wizard::naming::derive;
//! use resource_wizard::template::Substitutor;
//!
//! let names = derive("Account Setting");
//! assert_eq!(names.camel_singular(), "accountSetting");
//! assert_eq!(names.kebab_plural(), "account-settings");
//!
//! let out = Substitutor::default().substitute("class DummyStudlyS {}", &names, false);
//! assert_eq!(out, "class AccountSetting {}");
//! ```
//!
//! # Modules
//!
//! - [`naming`] - canonicalization, inflection and case variants
//! - [`template`] - placeholder table and stub substitution
//! - [`scaffold`] - artifact kinds and the generation plan
//! - [`events`] - broadcast channel naming for resource events
//! - [`requests`] - form request rule selection
//! - [`registry`] - the configured resource list
//! - [`config`] - layered configuration
//! - [`error`] - error type shared with the CLI
//! - [`observability`] - logging setup

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod events;
pub mod naming;
pub mod observability;
pub mod registry;
pub mod requests;
pub mod scaffold;
pub mod template;

pub use config::WizardConfig;
pub use error::{Result, WizardError};
pub use naming::{derive, NameVariants};
pub use registry::ResourceRegistry;
pub use template::Substitutor;
