//! Log setup for debugging and error tracking.
//!
//! The TUI owns the terminal, so log output goes to a file via `fern`
//! rather than stdout. When logging is disabled no dispatcher is
//! installed and the `log` macros throughout the crate are no-ops.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the global logger according to the configuration.
///
/// Must be called once, before the event loop starts; a second call would
/// fail because the global logger can only be set once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_file = fern::log_file(&config.file)
        .with_context(|| format!("Failed to open log file: {}", config.file))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging initialized");
    Ok(())
}
