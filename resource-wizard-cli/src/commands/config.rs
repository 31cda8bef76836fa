//! `config`: print the effective configuration

use anyhow::{Context, Result};
use console::style;
use resource_wizard::config::LOCAL_CONFIG_FILE;
use resource_wizard::WizardConfig;

/// Print the merged configuration as TOML, with the files it is read from
pub fn show(config: &WizardConfig) -> Result<()> {
    let rendered = config
        .to_toml_string()
        .context("Failed to render configuration")?;

    println!(
        "{} {}",
        style("# user config:").dim(),
        style(WizardConfig::recommended_path().display()).dim()
    );
    println!(
        "{} {}\n",
        style("# project config:").dim(),
        style(LOCAL_CONFIG_FILE).dim()
    );
    print!("{rendered}");
    Ok(())
}
