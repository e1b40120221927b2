// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tracing subscriber setup. Call [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

use crate::errors::ConfigError;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; `level` is the fallback when it is unset or
/// unparseable.
pub fn init_logging(level: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ConfigError::Logging(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Logging(format!("failed to set subscriber: {e}")))?;

    Ok(())
}
