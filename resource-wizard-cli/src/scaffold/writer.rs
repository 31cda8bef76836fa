//! Writing generated files
//!
//! Class artifacts are checked before anything is written: a class may not be
//! generated when its target file already exists or when another PHP file in
//! the same directory already declares a type with that name.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use resource_wizard::scaffold::PlannedArtifact;
use resource_wizard::{Result, WizardError};
use walkdir::WalkDir;

use super::GeneratedFile;

/// Writes generated files, refusing to clobber existing classes
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactWriter {
    force: bool,
}

impl ArtifactWriter {
    /// Create a writer; `force` skips the duplicate check
    #[must_use]
    pub const fn new(force: bool) -> Self {
        Self { force }
    }

    /// Fail when `artifact` would duplicate an existing class
    ///
    /// Artifacts without a class name are never checked.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::DuplicateArtifact`] naming the colliding file.
    pub fn check(&self, artifact: &PlannedArtifact) -> Result<()> {
        if self.force {
            return Ok(());
        }
        let Some(class) = artifact.class_name.as_deref() else {
            return Ok(());
        };

        let target = artifact.path();
        if target.exists() {
            return Err(WizardError::DuplicateArtifact {
                name: class.to_string(),
                path: target,
            });
        }

        match find_declaration(&artifact.dir, class) {
            Some(path) => Err(WizardError::DuplicateArtifact {
                name: class.to_string(),
                path,
            }),
            None => Ok(()),
        }
    }

    /// Write `file`, creating its directory
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::FileWrite`] if the directory or the file cannot
    /// be written.
    pub fn write(&self, file: &GeneratedFile) -> Result<()> {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).map_err(|source| WizardError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&file.path, &file.content).map_err(|source| WizardError::FileWrite {
            path: file.path.clone(),
            source,
        })?;

        tracing::info!(path = %file.path.display(), kind = %file.description, "wrote file");
        Ok(())
    }
}

/// First `*.php` file directly inside `dir` that declares `class`
fn find_declaration(dir: &Path, class: &str) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    let pattern = declaration_pattern(class);
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "php"))
        .find(|entry| {
            fs::read_to_string(entry.path()).is_ok_and(|source| pattern.is_match(&source))
        })
        .map(walkdir::DirEntry::into_path)
}

/// Matches a PHP type declaration of exactly `name`
fn declaration_pattern(name: &str) -> Regex {
    let pattern = format!(
        r"(?m)^\s*(?:(?:abstract|final|readonly)\s+)*(?:class|interface|trait|enum)\s+{}\b",
        regex::escape(name)
    );
    Regex::new(&pattern).unwrap_or_else(|e| unreachable!("escaped class name: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_wizard::scaffold::ArtifactKind;
    use tempfile::TempDir;

    fn model_artifact(dir: &Path) -> PlannedArtifact {
        PlannedArtifact {
            kind: ArtifactKind::Model,
            stub: "Database/Model.php".to_string(),
            dir: dir.to_path_buf(),
            file_name: "Person.php".to_string(),
            class_name: Some("Person".to_string()),
        }
    }

    fn generated(artifact: PlannedArtifact, content: &str) -> GeneratedFile {
        GeneratedFile {
            path: artifact.path(),
            description: artifact.kind.to_string(),
            artifact,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_declaration_pattern() {
        let pattern = declaration_pattern("Person");
        assert!(pattern.is_match("<?php\nclass Person extends Model\n{"));
        assert!(pattern.is_match("<?php\n\nfinal class Person\n"));
        assert!(pattern.is_match("interface Person {}"));
        assert!(pattern.is_match("  enum Person: string {}"));
        assert!(!pattern.is_match("class PersonRequest extends FormRequest"));
        assert!(!pattern.is_match("// uses Person\n$person = new Person();"));
    }

    #[test]
    fn test_check_passes_on_empty_dir() {
        let dir = TempDir::new().unwrap();
        let writer = ArtifactWriter::default();
        assert!(writer.check(&model_artifact(dir.path())).is_ok());
        assert!(writer.check(&model_artifact(&dir.path().join("missing"))).is_ok());
    }

    #[test]
    fn test_existing_target_is_duplicate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Person.php"), "<?php // empty").unwrap();

        let err = ArtifactWriter::default()
            .check(&model_artifact(dir.path()))
            .unwrap_err();
        assert!(matches!(err, WizardError::DuplicateArtifact { ref name, .. } if name == "Person"));
    }

    #[test]
    fn test_declaration_in_sibling_is_duplicate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Legacy.php"), "<?php\nclass Person {}\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "class Person").unwrap();

        let err = ArtifactWriter::default()
            .check(&model_artifact(dir.path()))
            .unwrap_err();
        match err {
            WizardError::DuplicateArtifact { path, .. } => {
                assert_eq!(path, dir.path().join("Legacy.php"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nested_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Old")).unwrap();
        fs::write(dir.path().join("Old/Person.php"), "<?php\nclass Person {}\n").unwrap();

        assert!(ArtifactWriter::default().check(&model_artifact(dir.path())).is_ok());
    }

    #[test]
    fn test_force_and_classless_skip_check() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Person.php"), "<?php\nclass Person {}\n").unwrap();

        assert!(ArtifactWriter::new(true).check(&model_artifact(dir.path())).is_ok());

        let mut page = model_artifact(dir.path());
        page.class_name = None;
        assert!(ArtifactWriter::default().check(&page).is_ok());
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let artifact = model_artifact(&dir.path().join("app/Models/ResourceWizard"));
        let file = generated(artifact, "<?php\nclass Person {}\n");

        ArtifactWriter::default().write(&file).unwrap();
        assert_eq!(fs::read_to_string(&file.path).unwrap(), "<?php\nclass Person {}\n");
    }
}
