//! Tracing subscriber setup.
//!
//! Log lines go to stderr so stdout carries only the rendered document.

use tracing_subscriber::fmt;

use crate::config::{LogConfig, LogFormat, ValidationError};

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the configured filter when present. Calling this
/// twice is harmless; the second install is ignored.
pub fn init(config: &LogConfig) -> Result<(), ValidationError> {
    let filter = config.env_filter()?;
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Pretty => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
