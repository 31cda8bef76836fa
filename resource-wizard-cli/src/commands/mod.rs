//! CLI command implementations

pub mod build;
pub mod config;
pub mod create;
pub mod names;
pub mod resources;
pub mod stubs;

pub use build::{BuildCommand, BuildReport};
pub use create::CreateCommand;
pub use names::NamesCommand;
pub use stubs::StubsCommand;
