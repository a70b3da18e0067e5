use anyhow::{anyhow, Result};
use ongkir_core::config::{AppConfig, LogFormat};
use tracing::Level;

/// Install the global subscriber. Logs go to stderr so stdout carries only command output.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let log_level = parse_level(&config.logging.level);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let installed = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|error| anyhow!("failed to install tracing subscriber: {error}"))
}

pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::INFO)
}
