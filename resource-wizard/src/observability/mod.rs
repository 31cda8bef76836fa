//! Logging setup
//!
//! Diagnostics go to stderr through `tracing` so they never mix with the
//! generated-file listing the CLI prints on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSettings};

/// Initialize logging
///
/// `RUST_LOG` wins over the configured level; `verbose` raises the default
/// to `debug` for this crate and the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use resource_wizard::{config::LoggingSettings, observability};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(&LoggingSettings::default(), false)?;
/// tracing::info!("wizard started");
/// # Ok(())
/// # }
/// ```
pub fn init(settings: &LoggingSettings, verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose {
        "warn,resource_wizard=debug,resource_wizard_cli_lib=debug".to_string()
    } else {
        settings.level.clone()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    match settings.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
