//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default event color for new entries
//! - Refresh cadence of the current-time highlight
//! - Export formatting and file naming
//! - Terminal display options
//!
//! Configuration is stored at `<data dir>/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::palette::Color;
use crate::proximity::TickSchedule;

/// Grid editing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Color used when an entry is created without one.
    #[serde(default)]
    pub default_color: Color,
}

/// Current-time highlight refresh cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
    #[serde(default = "default_sub_tick_secs")]
    pub sub_tick_secs: u64,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Default file name is `{file_prefix}-YYYY-MM-DD.json`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_time_column: bool,
    /// Emit ANSI colors in `show`.
    #[serde(default = "default_true")]
    pub color_output: bool,
    /// Column width of a day cell in `show`.
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_tick_secs() -> u64 {
    60
}
fn default_sub_tick_secs() -> u64 {
    15
}
fn default_true() -> bool {
    true
}
fn default_file_prefix() -> String {
    "schedule".into()
}
fn default_cell_width() -> usize {
    12
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_color: Color::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
            sub_tick_secs: default_sub_tick_secs(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            file_prefix: default_file_prefix(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_time_column: true,
            color_output: true,
            cell_width: default_cell_width(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    let n = value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                    serde_json::Value::Number(n.into())
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit
    /// the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Refresh cadence for the current-time highlight.
    pub fn tick_schedule(&self) -> TickSchedule {
        TickSchedule::from_secs(self.clock.tick_secs, self.clock.sub_tick_secs)
    }
}
