//! `resources`: list registered resources

use anyhow::Result;
use console::style;
use resource_wizard::{derive, ResourceRegistry};

/// Print the registry, one resource per line with its entry name
pub fn list(registry: &ResourceRegistry) -> Result<()> {
    if registry.is_empty() {
        println!(
            "No resources registered. Add one with {}",
            style("resource-wizard create <NAME>").cyan()
        );
        return Ok(());
    }

    println!("\n{} ({})\n", style("Resources").cyan().bold(), registry.len());
    for name in registry.resources() {
        let names = derive(name);
        println!(
            "  {:<30} {}",
            style(names.title_singular()).green(),
            style(format!("{}.php", names.kebab_singular())).dim()
        );
    }
    Ok(())
}
