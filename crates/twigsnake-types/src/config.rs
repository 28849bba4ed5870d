//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::errors::{TwigsnakeError, Result};
use crate::{Flags, Severity};

/// Leveled logger configuration.
///
/// Every field has a default, so an empty document yields a logger at
/// informational level with the standard prefixes and flags.
///
/// ```
/// use twigsnake_types::{Flags, LoggerConfig, Severity};
///
/// let config = LoggerConfig::from_yaml_str("
/// threshold: debug
/// flags: [date, microseconds, msg_prefix]
/// prefixes:
///   debug: ''
/// ").unwrap();
///
/// assert_eq!(config.threshold, Severity::Debug);
/// assert_eq!(config.prefix_for(Severity::Debug), "");
/// assert_eq!(config.prefix_for(Severity::Informational), "[INFO] ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Most verbose severity admitted
    #[serde(default = "default_threshold")]
    pub threshold: Severity,
    /// Flags installed on every sub-logger
    #[serde(default = "default_flags")]
    pub flags: Flags,
    /// Prefix overrides; severities not listed keep their default prefix
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prefixes: BTreeMap<Severity, String>,
}

fn default_threshold() -> Severity {
    Severity::Informational
}

fn default_flags() -> Flags {
    Flags::DEFAULT
}

impl LoggerConfig {
    /// Configuration with the given threshold and everything else default.
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
            .map_err(|e| TwigsnakeError::Config(format!("Failed to parse logger config: {}", e)))
    }

    /// Render configuration as YAML text.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TwigsnakeError::Config(format!("Failed to serialize logger config: {}", e))
        })
    }

    /// Set the flags.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Override the prefix of one severity.
    pub fn with_prefix(mut self, severity: Severity, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(severity, prefix.into());
        self
    }

    /// Effective prefix for a severity.
    pub fn prefix_for(&self, severity: Severity) -> &str {
        self.prefixes
            .get(&severity)
            .map(String::as_str)
            .unwrap_or_else(|| severity.default_prefix())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            flags: default_flags(),
            prefixes: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LoggerConfig::from_yaml_str("").unwrap(), LoggerConfig::default());
        assert_eq!(LoggerConfig::from_yaml_str("{}").unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_invalid_threshold_is_config_error() {
        let err = LoggerConfig::from_yaml_str("threshold: verbose").unwrap_err();
        assert!(matches!(err, TwigsnakeError::Config(_)));
    }

    #[test]
    fn test_threshold_accepts_ordinals_and_short_names() {
        let config = LoggerConfig::from_yaml_str("threshold: 7").unwrap();
        assert_eq!(config.threshold, Severity::Debug);

        let config = LoggerConfig::from_yaml_str("threshold: INFO").unwrap();
        assert_eq!(config.threshold, Severity::Informational);

        let config = LoggerConfig::from_yaml_str("prefixes:\n  3: 'E '\n  WARN: 'W '").unwrap();
        assert_eq!(config.prefix_for(Severity::Error), "E ");
        assert_eq!(config.prefix_for(Severity::Warning), "W ");

        let err = LoggerConfig::from_yaml_str("threshold: 9").unwrap_err();
        assert!(matches!(err, TwigsnakeError::Config(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(LoggerConfig::from_yaml_str("rotation: daily").is_err());
    }

    #[test]
    fn test_yaml_roundtrip_keeps_overrides() {
        let config = LoggerConfig::new(Severity::Notice)
            .with_flags(Flags::STD | Flags::UTC)
            .with_prefix(Severity::Error, "E ");
        let text = config.to_yaml_string().unwrap();
        assert_eq!(LoggerConfig::from_yaml_str(&text).unwrap(), config);
    }
}
