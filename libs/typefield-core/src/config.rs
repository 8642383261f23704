//! Add-on configuration as published by the host.
//!
//! # Format
//! ```json
//! {
//!     "enabled": true,
//!     "ignore_case": true,
//!     "ignore_accents": false,
//!     "ignore_punctuations": false
//! }
//! ```

use std::fmt::Display;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::CompareOptions;

/// Add-on configuration.
///
/// Missing fields fall back to the defaults below; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonConfig {
    pub enabled: bool,
    pub ignore_case: bool,
    pub ignore_accents: bool,
    pub ignore_punctuations: bool,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_case: true,
            ignore_accents: false,
            ignore_punctuations: false,
        }
    }
}

impl AddonConfig {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolve the configuration from a retrieval attempt.
    ///
    /// A failed retrieval or unparsable payload yields the default
    /// configuration so that classification still runs.
    pub fn resolve<E: Display>(fetched: std::result::Result<String, E>) -> Self {
        let json = match fetched {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Config retrieval failed, using defaults: {}", e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Config could not be parsed, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Normalization flags for one classification pass.
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            ignore_case: self.ignore_case,
            ignore_accents: self.ignore_accents,
            ignore_punctuation: self.ignore_punctuations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "enabled": false,
            "ignore_case": false,
            "ignore_accents": true,
            "ignore_punctuations": true
        }"#;
        let config = AddonConfig::from_json(json).unwrap();
        assert!(!config.enabled);
        assert!(!config.ignore_case);
        assert!(config.ignore_accents);
        assert!(config.ignore_punctuations);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = AddonConfig::from_json(r#"{"ignore_accents": true}"#).unwrap();
        assert!(config.enabled);
        assert!(config.ignore_case);
        assert!(config.ignore_accents);
        assert!(!config.ignore_punctuations);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = AddonConfig::from_json(r#"{"enabled": true, "theme": "dark"}"#).unwrap();
        assert_eq!(config, AddonConfig::default());
    }

    #[test]
    fn reject_invalid_json() {
        let result = AddonConfig::from_json("{ignore_case: yes}");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AddonConfig::from_file("/nonexistent/_typefield.config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn resolve_failed_fetch_uses_defaults() {
        let config = AddonConfig::resolve(Err::<String, _>("network response was not ok"));
        assert_eq!(config, AddonConfig::default());
        assert!(config.enabled);
        assert!(config.ignore_case);
    }

    #[test]
    fn resolve_garbage_uses_defaults() {
        let config = AddonConfig::resolve(Ok::<_, String>("<html>".to_string()));
        assert_eq!(config, AddonConfig::default());
    }

    #[test]
    fn resolve_valid_payload() {
        let config =
            AddonConfig::resolve(Ok::<_, String>(r#"{"ignore_case": false}"#.to_string()));
        assert!(!config.ignore_case);
    }

    #[test]
    fn options_map_flags() {
        let config = AddonConfig {
            enabled: true,
            ignore_case: false,
            ignore_accents: true,
            ignore_punctuations: true,
        };
        let options = config.options();
        assert!(!options.ignore_case);
        assert!(options.ignore_accents);
        assert!(options.ignore_punctuation);
    }
}
