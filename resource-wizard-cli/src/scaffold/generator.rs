//! Resource file generator
//!
//! Fills the stub of every [`PlannedArtifact`] with the derived names. Nothing
//! is written here; [`super::ArtifactWriter`] puts the results on disk.

use std::path::PathBuf;

use resource_wizard::scaffold::{PlannedArtifact, ScaffoldPlan};
use resource_wizard::{NameVariants, Result, Substitutor};

use crate::templates::StubStore;

/// A rendered file ready to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// The artifact this file realizes
    pub artifact: PlannedArtifact,
    /// Target path
    pub path: PathBuf,
    /// Rendered content
    pub content: String,
    /// Short label for output
    pub description: String,
}

/// Renders planned artifacts for one resource
pub struct ResourceGenerator<'a> {
    stubs: &'a StubStore,
    substitutor: Substitutor,
    names: &'a NameVariants,
    shared: bool,
}

impl<'a> ResourceGenerator<'a> {
    /// Create a generator for `names`
    ///
    /// `shared` selects the shared-resource variant of every stub.
    #[must_use]
    pub const fn new(
        stubs: &'a StubStore,
        substitutor: Substitutor,
        names: &'a NameVariants,
        shared: bool,
    ) -> Self {
        Self {
            stubs,
            substitutor,
            names,
            shared,
        }
    }

    /// Render one artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the stub cannot be loaded or, in strict mode,
    /// contains an unknown placeholder.
    pub fn render(&self, artifact: &PlannedArtifact) -> Result<GeneratedFile> {
        let stub = self.stubs.load(&artifact.stub)?;
        let content = self
            .substitutor
            .try_substitute(&stub, self.names, self.shared)?;

        Ok(GeneratedFile {
            artifact: artifact.clone(),
            path: artifact.path(),
            content,
            description: artifact.kind.to_string(),
        })
    }

    /// Render every artifact of `plan`, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the first rendering error.
    pub fn render_plan(&self, plan: &ScaffoldPlan) -> Result<Vec<GeneratedFile>> {
        plan.iter().map(|artifact| self.render(artifact)).collect()
    }
}
