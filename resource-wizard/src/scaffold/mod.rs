//! Scaffold planning
//!
//! A [`ScaffoldPlan`] lists every file one resource needs: which stub fills
//! it, where it goes and, for PHP classes, the class it declares. Planning is
//! pure. Loading stubs and writing files is the caller's job.
//!
//! Backend artifacts (migration, model, factory, request, seven events) are
//! always planned. The controller and the Vue/JS front end are planned only
//! when [`PlanOptions::frontend`] is set.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::WizardConfig;
use crate::events::EventAction;
use crate::naming::NameVariants;

/// Directory every generated PHP class lives under within its layer
pub const NAMESPACE_DIR: &str = "ResourceWizard";

/// Migration file name prefix, e.g. `2024_01_31_120000`
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// BREAD views of the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreadAction {
    /// List view
    Browse,
    /// Detail view
    Read,
    /// Edit form
    Edit,
    /// Create form
    Add,
    /// Delete confirmation
    Delete,
}

impl BreadAction {
    /// All views, in generation order
    pub const ALL: [Self; 5] = [Self::Browse, Self::Read, Self::Edit, Self::Add, Self::Delete];

    /// Stub and file-name stem
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browse => "browse",
            Self::Read => "read",
            Self::Edit => "edit",
            Self::Add => "add",
            Self::Delete => "delete",
        }
    }

    /// Capitalized form used in component names
    #[must_use]
    pub const fn studly(self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::Read => "Read",
            Self::Edit => "Edit",
            Self::Add => "Add",
            Self::Delete => "Delete",
        }
    }
}

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Resource registration entry under `config/resources`
    Resource,
    /// Create-table migration
    Migration,
    /// Eloquent model
    Model,
    /// Model factory
    Factory,
    /// Form request
    Request,
    /// Broadcast event
    Event(EventAction),
    /// HTTP controller
    Controller,
    /// Inertia page
    Page,
    /// BREAD view component
    Bread(BreadAction),
    /// Front-end item class
    Item,
    /// Store module
    Module,
    /// DPS page settings
    DpsPage,
}

impl ArtifactKind {
    /// Whether this kind belongs to the front-end set
    #[must_use]
    pub const fn is_frontend(self) -> bool {
        matches!(
            self,
            Self::Controller | Self::Page | Self::Bread(_) | Self::Item | Self::Module | Self::DpsPage
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource => f.write_str("resource entry"),
            Self::Migration => f.write_str("migration"),
            Self::Model => f.write_str("model"),
            Self::Factory => f.write_str("factory"),
            Self::Request => f.write_str("request"),
            Self::Event(action) => write!(f, "{} event", action.as_str().to_lowercase()),
            Self::Controller => f.write_str("controller"),
            Self::Page => f.write_str("page"),
            Self::Bread(action) => write!(f, "{} view", action.as_str()),
            Self::Item => f.write_str("item class"),
            Self::Module => f.write_str("store module"),
            Self::DpsPage => f.write_str("DPS page settings"),
        }
    }
}

/// Resolved project directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Application code (`app`)
    pub app: PathBuf,
    /// Database code (`database`)
    pub database: PathBuf,
    /// Front-end sources (`resources`)
    pub resources: PathBuf,
    /// Configuration (`config`)
    pub config: PathBuf,
}

impl Layout {
    /// Conventional Laravel layout under `base`
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            app: base.join("app"),
            database: base.join("database"),
            resources: base.join("resources"),
            config: base.join("config"),
        }
    }

    /// Layout from the configured paths, resolved against `base_path`
    #[must_use]
    pub fn from_config(config: &WizardConfig) -> Self {
        Self {
            app: config.resolve(&config.paths.app),
            database: config.resolve(&config.paths.database),
            resources: config.resolve(&config.paths.resources),
            config: config.resolve(&config.paths.config),
        }
    }

    /// Directory holding resource registration entries
    #[must_use]
    pub fn resource_entries(&self) -> PathBuf {
        self.config.join("resources")
    }
}

/// Plan switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    /// Include the controller and the front-end files
    pub frontend: bool,
}

/// One file to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedArtifact {
    /// What the file is
    pub kind: ArtifactKind,
    /// Stub name relative to the stub root, without the `.stub` extension
    pub stub: String,
    /// Target directory
    pub dir: PathBuf,
    /// Target file name
    pub file_name: String,
    /// Declared PHP class, checked for duplicates before writing
    pub class_name: Option<String>,
}

impl PlannedArtifact {
    fn new(kind: ArtifactKind, stub: impl Into<String>, dir: PathBuf, file_name: impl Into<String>) -> Self {
        Self {
            kind,
            stub: stub.into(),
            dir,
            file_name: file_name.into(),
            class_name: None,
        }
    }

    /// PHP class artifact whose file is `{class}.php`
    fn class(kind: ArtifactKind, stub: impl Into<String>, dir: PathBuf, class: String) -> Self {
        let file_name = format!("{class}.php");
        Self::new(kind, stub, dir, file_name).with_class(class)
    }

    fn with_class(mut self, class: String) -> Self {
        self.class_name = Some(class);
        self
    }

    /// Full target path
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Ordered list of files for one resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldPlan {
    artifacts: Vec<PlannedArtifact>,
}

impl ScaffoldPlan {
    /// Plan the `build` artifacts for `names`
    ///
    /// `timestamp` prefixes the migration file name.
    #[must_use]
    pub fn build(
        names: &NameVariants,
        layout: &Layout,
        timestamp: NaiveDateTime,
        options: PlanOptions,
    ) -> Self {
        let studly_s = names.studly_singular();
        let studly_p = names.studly_plural();
        let snake_p = names.snake_plural();

        let mut artifacts = vec![
            PlannedArtifact::new(
                ArtifactKind::Migration,
                "Database/create-migration.php",
                layout.database.join("migrations"),
                format!("{}_create_{snake_p}_table.php", timestamp.format(MIGRATION_TIMESTAMP_FORMAT)),
            )
            .with_class(format!("Create{studly_p}Table")),
            PlannedArtifact::class(
                ArtifactKind::Model,
                "Database/Model.php",
                layout.app.join("Models").join(NAMESPACE_DIR),
                studly_s.to_string(),
            ),
            PlannedArtifact::class(
                ArtifactKind::Factory,
                "Database/Factory.php",
                layout.database.join("factories").join(NAMESPACE_DIR),
                format!("{studly_s}Factory"),
            ),
            PlannedArtifact::class(
                ArtifactKind::Request,
                "Requests/Request.php",
                layout.app.join("Http").join("Requests").join(NAMESPACE_DIR),
                format!("{studly_s}Request"),
            ),
        ];

        let events_dir = layout.app.join("Events").join(NAMESPACE_DIR).join(studly_p);
        artifacts.extend(EventAction::ALL.into_iter().map(|action| {
            let stem = if action.uses_plural_name() { studly_p } else { studly_s };
            PlannedArtifact::class(
                ArtifactKind::Event(action),
                format!("Events/{action}.php"),
                events_dir.clone(),
                format!("{stem}{action}"),
            )
        }));

        if options.frontend {
            artifacts.extend(Self::frontend(names, layout));
        }

        tracing::debug!(
            resource = studly_s,
            artifacts = artifacts.len(),
            frontend = options.frontend,
            "planned scaffold"
        );

        Self { artifacts }
    }

    fn frontend(names: &NameVariants, layout: &Layout) -> Vec<PlannedArtifact> {
        let studly_p = names.studly_plural();
        let snake_p = names.snake_plural();
        let js = layout.resources.join("js");
        let bread_dir = js.join("components").join("resources").join(studly_p);

        let mut artifacts = vec![
            PlannedArtifact::class(
                ArtifactKind::Controller,
                "Http/Controller.php",
                layout.app.join("Http").join("Controllers").join(NAMESPACE_DIR),
                format!("{studly_p}Controller"),
            ),
            PlannedArtifact::new(
                ArtifactKind::Page,
                "Js/page.vue",
                js.join("pages"),
                format!("{studly_p}.vue"),
            ),
        ];

        artifacts.extend(BreadAction::ALL.into_iter().map(|action| {
            PlannedArtifact::new(
                ArtifactKind::Bread(action),
                format!("Js/{}.vue", action.as_str()),
                bread_dir.clone(),
                format!("{studly_p}{}.vue", action.studly()),
            )
        }));

        artifacts.push(PlannedArtifact::new(
            ArtifactKind::Item,
            "Js/item.js",
            bread_dir,
            format!("{studly_p}.js"),
        ));
        artifacts.push(PlannedArtifact::new(
            ArtifactKind::Module,
            "Js/module.js",
            js.join("modules").join("resources"),
            format!("{snake_p}.js"),
        ));
        artifacts.push(PlannedArtifact::new(
            ArtifactKind::DpsPage,
            "Js/dps_page.js",
            js.join("dps").join("common"),
            format!("{snake_p}_page.js"),
        ));

        artifacts
    }

    /// The registration entry written by `create`
    #[must_use]
    pub fn resource_entry(names: &NameVariants, layout: &Layout) -> PlannedArtifact {
        PlannedArtifact::new(
            ArtifactKind::Resource,
            "resource.php",
            layout.resource_entries(),
            format!("{}.php", names.kebab_singular()),
        )
    }

    /// Planned files in generation order
    #[must_use]
    pub fn artifacts(&self) -> &[PlannedArtifact] {
        &self.artifacts
    }

    /// Number of planned files
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True when nothing is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Iterate the planned files
    pub fn iter(&self) -> std::slice::Iter<'_, PlannedArtifact> {
        self.artifacts.iter()
    }
}

impl<'a> IntoIterator for &'a ScaffoldPlan {
    type Item = &'a PlannedArtifact;
    type IntoIter = std::slice::Iter<'a, PlannedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
