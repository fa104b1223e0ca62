// Rust guideline compliant 2026-02-06

//! Deployment configuration for envelope rendering.

use crate::locale::{Locale, LocaleEncoding};
use crate::render::RenderOptions;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`Config::load`].
pub const CONFIG_FILE_NAME: &str = "soft-result.toml";

/// Deployment-level rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale written for envelopes that never had one set.
    #[serde(default)]
    pub default_locale: Locale,

    /// Wire encoding of the locale field.
    #[serde(default)]
    pub locale_encoding: LocaleEncoding,

    /// Whether response bodies are pretty-printed.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            locale_encoding: LocaleEncoding::default(),
            pretty: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/soft-result.toml`
    /// 3. Environment variables with `SOFT_RESULT_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory that may contain `soft-result.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(
            default_locale = %config.default_locale,
            locale_encoding = ?config.locale_encoding,
            pretty = config.pretty,
            "loaded soft-result config"
        );

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SOFT_RESULT_DEFAULT_LOCALE` - Locale name or code (`eng`, `3`)
    /// - `SOFT_RESULT_LOCALE_ENCODING` - `numeric` or `name`
    /// - `SOFT_RESULT_PRETTY` - Pretty-print bodies (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SOFT_RESULT_DEFAULT_LOCALE") {
            self.default_locale = val.parse().map_err(|_| {
                crate::Error::Config(format!(
                    "SOFT_RESULT_DEFAULT_LOCALE must be a locale name or code, got '{}'",
                    val
                ))
            })?;
        }

        if let Ok(val) = std::env::var("SOFT_RESULT_LOCALE_ENCODING") {
            self.locale_encoding = val.parse().map_err(|_| {
                crate::Error::Config(
                    "SOFT_RESULT_LOCALE_ENCODING must be numeric or name".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("SOFT_RESULT_PRETTY") {
            self.pretty = val.parse().map_err(|_| {
                crate::Error::Config("SOFT_RESULT_PRETTY must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_locale` is `Undefined`.
    fn validate(&self) -> Result<()> {
        if self.default_locale == Locale::Undefined {
            return Err(crate::Error::Config(
                "default_locale must name a language, got Undefined".to_string(),
            ));
        }

        Ok(())
    }

    /// Rendering options derived from this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            locale_encoding: self.locale_encoding,
            default_locale: self.default_locale,
            pretty: self.pretty,
        }
    }

    /// Saves the configuration to `<dir>/soft-result.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
