// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for beats.
//!
//! Settings live in a TOML file, `beats.toml` in the working directory by
//! default or the path named by `BEATS_CONFIG`. Every key is optional.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name
pub const CONFIG_FILE: &str = "beats.toml";

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "BEATS_CONFIG";

/// Log levels accepted in `[log] level`
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::parse(toml, Path::new("<string>"))
    }

    /// Find and load the configuration.
    ///
    /// An explicit `BEATS_CONFIG` path must exist; a missing default file
    /// just means defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Self::load_or_default(CONFIG_FILE),
        }
    }

    /// Load from a path, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log.level.clone()));
        }
        Ok(())
    }
}

/// Editor settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Cursor blink period in milliseconds
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
    /// Ticks kept visible behind the cursor when scrolling
    #[serde(default = "default_lookback")]
    pub lookback: i64,
    /// Number of tick columns in the grid
    #[serde(default = "default_visible_ticks")]
    pub visible_ticks: usize,
    /// Directory songs are saved into
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// Name for a song created without a file
    #[serde(default = "default_new_song_name")]
    pub new_song_name: String,
    /// Tempo for a song created without a file
    #[serde(default = "default_new_song_tempo")]
    pub new_song_tempo: i64,
}

fn default_blink_interval_ms() -> u64 {
    500
}
fn default_lookback() -> i64 {
    7
}
fn default_visible_ticks() -> usize {
    16
}
fn default_save_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_new_song_name() -> String {
    "untitled".to_string()
}
fn default_new_song_tempo() -> i64 {
    100
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: default_blink_interval_ms(),
            lookback: default_lookback(),
            visible_ticks: default_visible_ticks(),
            save_dir: default_save_dir(),
            new_song_name: default_new_song_name(),
            new_song_tempo: default_new_song_tempo(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Maximum level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log output to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.editor.blink_interval_ms, 500);
        assert_eq!(config.editor.lookback, 7);
        assert_eq!(config.editor.visible_ticks, 16);
        assert_eq!(config.editor.save_dir, PathBuf::from("."));
        assert_eq!(config.editor.new_song_name, "untitled");
        assert_eq!(config.editor.new_song_tempo, 100);
        assert_eq!(config.log.level, "warn");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[editor]
lookback = 3
new_song_name = "jam"

[log]
level = "DEBUG"
file = "beats.log"
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.editor.lookback, 3);
        assert_eq!(config.editor.new_song_name, "jam");
        assert_eq!(config.editor.new_song_tempo, 100);
        assert_eq!(config.editor.blink_interval_ms, 500);
        assert_eq!(config.log.level, "DEBUG");
        assert_eq!(config.log.file, Some(PathBuf::from("beats.log")));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_toml("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml("[editor]\nlookback = \"seven\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\nblink_interval_ms = 250").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.editor.blink_interval_ms, 250);
        assert_eq!(config.editor.visible_ticks, 16);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.editor.save_dir = PathBuf::from("songs");
        config.log.level = "info".to_string();

        let toml = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&toml).unwrap(), config);
    }
}
