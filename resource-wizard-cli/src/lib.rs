//! resource-wizard CLI library
//!
//! Everything behind the `resource-wizard` binary: the stub store, rendering
//! and writing of planned artifacts, composer autoload regeneration, and the
//! command implementations.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod composer;
pub mod discovery;
pub mod scaffold;
pub mod templates;

pub use composer::{AutoloadOutcome, Composer};
pub use scaffold::{ArtifactWriter, GeneratedFile, ResourceGenerator};
pub use templates::{StubSource, StubStore};
