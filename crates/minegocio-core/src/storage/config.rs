//! TOML-based application configuration.
//!
//! Stores:
//! - Assistant settings (API key, model)
//! - UI preferences (toast duration)
//!
//! Configuration is stored at `~/.config/minegocio/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::events::Toast;

/// Assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Gemini API key. Falls back to the API_KEY environment variable
    /// when unset; with neither, the assistant is disabled.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_ms")]
    pub toast_duration_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/minegocio/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_toast_ms() -> u64 {
    Toast::DISPLAY_MS
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_ms(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        data_dir().map(|d| d.join("config.toml")).map_err(|e| {
            ConfigError::LoadFailed {
                path: PathBuf::from("config.toml"),
                message: e.to_string(),
            }
        })
    }

    /// Load from disk or return (and write) the default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by dotted key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "assistant.api_key" => Ok(self.assistant.api_key.clone().unwrap_or_default()),
            "assistant.model" => Ok(self.assistant.model.clone()),
            "ui.toast_duration_ms" => Ok(self.ui.toast_duration_ms.to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a config value by dotted key.
    ///
    /// # Errors
    /// Returns an error for unknown keys or unparsable values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "assistant.api_key" => {
                self.assistant.api_key = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "assistant.model" => self.assistant.model = value.to_string(),
            "ui.toast_duration_ms" => {
                self.ui.toast_duration_ms =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as milliseconds"),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.assistant.api_key, None);
        assert_eq!(cfg.assistant.model, "gemini-2.5-flash");
        assert_eq!(cfg.ui.toast_duration_ms, 3000);
    }

    #[test]
    fn toml_round_trip() {
        let mut cfg = Config::default();
        cfg.assistant.api_key = Some("secret".into());
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.assistant.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn empty_toml_fills_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.assistant.model, "gemini-2.5-flash");
    }

    #[test]
    fn get_set_by_key() {
        let mut cfg = Config::default();
        cfg.set("assistant.model", "gemini-2.0-flash").unwrap();
        assert_eq!(cfg.get("assistant.model").unwrap(), "gemini-2.0-flash");

        cfg.set("ui.toast_duration_ms", "5000").unwrap();
        assert_eq!(cfg.ui.toast_duration_ms, 5000);

        assert!(matches!(
            cfg.set("ui.toast_duration_ms", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.get("window.pinned"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
