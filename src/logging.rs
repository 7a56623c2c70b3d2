// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Log output setup.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::{ConfigError, LogConfig};

/// Environment variable overriding the configured level
pub const LOG_ENV: &str = "BEATS_LOG";

/// Resolve the max level, preferring `BEATS_LOG` over the config
pub fn resolve_level(config: &LogConfig, env_level: Option<&str>) -> Result<Level, ConfigError> {
    let raw = env_level.unwrap_or(&config.level);
    Level::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Dropped; used while the editor owns the terminal
    Discard,
}

impl LogTarget {
    /// A configured file always wins. Without one, an interactive session
    /// discards logs instead of writing over the screen.
    pub fn select(config: &LogConfig, interactive: bool) -> Self {
        match &config.file {
            Some(path) => LogTarget::File(path.clone()),
            None if interactive => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

/// Install the global subscriber.
///
/// Pass `interactive` when the terminal will be in raw mode. Calling this
/// twice is harmless.
pub fn init(config: &LogConfig, interactive: bool) -> Result<(), ConfigError> {
    let env_level = env::var(LOG_ENV).ok();
    let level = resolve_level(config, env_level.as_deref())?;

    let target = LogTarget::select(config, interactive);
    let writer = match &target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(io::sink),
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(target == LogTarget::Stderr)
        .with_writer(writer)
        .try_init();

    Ok(())
}
