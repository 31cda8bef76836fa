//! Rendering and writing planned artifacts

pub mod generator;
pub mod writer;

pub use generator::{GeneratedFile, ResourceGenerator};
pub use writer::ArtifactWriter;
