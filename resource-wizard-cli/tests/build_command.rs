//! Integration tests for the build and create commands

use std::fs;
use std::path::Path;

use resource_wizard::scaffold::Layout;
use resource_wizard::{ResourceRegistry, WizardConfig};
use resource_wizard_cli_lib::commands::{BuildCommand, CreateCommand};
use resource_wizard_cli_lib::discovery;
use tempfile::TempDir;

/// Configuration rooted at `base` with autoload regeneration disabled
fn project_config(base: &Path) -> WizardConfig {
    let mut config = WizardConfig {
        base_path: base.to_path_buf(),
        ..WizardConfig::default()
    };
    config.composer.enabled = false;
    config
}

fn build(name: &str) -> BuildCommand {
    BuildCommand {
        name: name.to_string(),
        ..BuildCommand::default()
    }
}

fn find_migration(base: &Path, suffix: &str) -> String {
    let dir = base.join("database/migrations");
    let entry = fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .find(|entry| entry.file_name().to_string_lossy().ends_with(suffix))
        .unwrap_or_else(|| panic!("no migration ending in {suffix}"));
    fs::read_to_string(entry.path()).unwrap()
}

#[test]
fn test_build_writes_backend_files() {
    let project = TempDir::new().unwrap();
    let base = project.path();
    let config = project_config(base);

    let report = build("person")
        .execute(&config, &ResourceRegistry::default())
        .unwrap();
    assert_eq!(report.files.len(), 11);

    for relative in [
        "app/Models/ResourceWizard/Person.php",
        "database/factories/ResourceWizard/PersonFactory.php",
        "app/Http/Requests/ResourceWizard/PersonRequest.php",
        "app/Events/ResourceWizard/People/PeopleBrowse.php",
        "app/Events/ResourceWizard/People/PersonRead.php",
        "app/Events/ResourceWizard/People/PersonUnlock.php",
    ] {
        assert!(base.join(relative).is_file(), "missing {relative}");
    }
    assert!(!base.join("resources/js").exists());

    let migration = find_migration(base, "_create_people_table.php");
    assert!(migration.contains("class CreatePeopleTable extends Migration"));

    let model = fs::read_to_string(base.join("app/Models/ResourceWizard/Person.php")).unwrap();
    assert!(model.contains("class Person extends Model"));
    assert!(model.contains("// Used only on Account Specific Resources"));
}

#[test]
fn test_build_shared_frontend() {
    let project = TempDir::new().unwrap();
    let base = project.path();
    let config = project_config(base);

    let command = BuildCommand {
        shared: true,
        frontend: true,
        ..build("Account Settings")
    };
    let report = command.execute(&config, &ResourceRegistry::default()).unwrap();
    assert_eq!(report.files.len(), 21);

    let controller = fs::read_to_string(
        base.join("app/Http/Controllers/ResourceWizard/AccountSettingsController.php"),
    )
    .unwrap();
    assert!(controller.contains("parent::__construct(true);"));

    let module = fs::read_to_string(base.join("resources/js/modules/resources/account_settings.js")).unwrap();
    assert!(module.contains("/* Start - Code Removed for Shared Resources"));
    assert!(!module.contains("window.Laravel.subdomain"));

    assert!(base
        .join("resources/js/components/resources/AccountSettings/AccountSettingsRead.vue")
        .is_file());
    assert!(base.join("resources/js/dps/common/account_settings_page.js").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = TempDir::new().unwrap();
    let config = project_config(project.path());

    let command = BuildCommand {
        dry_run: true,
        ..build("post")
    };
    let report = command.execute(&config, &ResourceRegistry::default()).unwrap();
    assert_eq!(report.files.len(), 11);
    assert!(report.autoload.is_none());
    assert_eq!(fs::read_dir(project.path()).unwrap().count(), 0);
}

#[test]
fn test_second_build_is_refused() {
    let project = TempDir::new().unwrap();
    let base = project.path();
    let config = project_config(base);
    let registry = ResourceRegistry::default();

    build("post").execute(&config, &registry).unwrap();

    let err = build("posts").execute(&config, &registry).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("already exists"), "{message}");

    // The failed run wrote nothing new
    let migrations = fs::read_dir(base.join("database/migrations")).unwrap().count();
    assert_eq!(migrations, 1);
}

#[test]
fn test_existing_class_in_target_dir_is_refused() {
    let project = TempDir::new().unwrap();
    let base = project.path();
    let models = base.join("app/Models/ResourceWizard");
    fs::create_dir_all(&models).unwrap();
    fs::write(models.join("Legacy.php"), "<?php\n\nclass Person extends Model {}\n").unwrap();

    let config = project_config(base);
    let err = build("person")
        .execute(&config, &ResourceRegistry::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("Legacy.php"));

    let forced = BuildCommand {
        force: true,
        ..build("person")
    };
    assert!(forced.execute(&config, &ResourceRegistry::default()).is_ok());
}

#[test]
fn test_blank_name_is_rejected() {
    let project = TempDir::new().unwrap();
    let config = project_config(project.path());
    for name in ["  ", "--", "_."] {
        assert!(build(name).execute(&config, &ResourceRegistry::default()).is_err());
    }
    assert!(!project.path().join("app").exists());
    assert!(!project.path().join("database").exists());
}

#[test]
fn test_stub_override_is_used() {
    let project = TempDir::new().unwrap();
    let base = project.path();
    fs::create_dir_all(base.join("stubs/Database")).unwrap();
    fs::write(
        base.join("stubs/Database/Factory.php.stub"),
        "<?php\n// custom\nclass DummyStudlySFactory {}\n",
    )
    .unwrap();

    let mut config = project_config(base);
    config.paths.stubs = "stubs".into();

    build("product").execute(&config, &ResourceRegistry::default()).unwrap();
    let factory =
        fs::read_to_string(base.join("database/factories/ResourceWizard/ProductFactory.php")).unwrap();
    assert_eq!(factory, "<?php\n// custom\nclass ProductFactory {}\n");
}

#[test]
fn test_create_registers_resource() {
    let project = TempDir::new().unwrap();
    let base = project.path();
    let config = project_config(base);

    let command = CreateCommand {
        name: "Account Settings".to_string(),
        force: false,
    };
    let path = command.execute(&config, &ResourceRegistry::default()).unwrap();
    assert_eq!(path, base.join("config/resources/account-setting.php"));

    let entry = fs::read_to_string(&path).unwrap();
    assert!(entry.contains("'name' => 'Account Setting'"));
    assert!(entry.contains("App\\Models\\ResourceWizard\\AccountSetting::class"));

    assert!(command.execute(&config, &ResourceRegistry::default()).is_err());
    let forced = CreateCommand {
        force: true,
        ..command
    };
    assert!(forced.execute(&config, &ResourceRegistry::default()).is_ok());

    let mut registry = ResourceRegistry::from_config(&config);
    let added = discovery::discover(&mut registry, &Layout::from_config(&config).resource_entries());
    assert_eq!(added, 1);
    assert_eq!(registry.resources(), ["account-setting"]);
}
