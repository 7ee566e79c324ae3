//! Configuration structures for the receipt pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Main configuration for spendscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendscanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration used by callers rendering records.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of words kept in the description.
    pub max_description_words: usize,

    /// Description used when the text has no words.
    pub fallback_description: String,

    /// Read ambiguous `A/B/YY` dates as day/month instead of month/day.
    pub day_first: bool,

    /// Read ambiguous `A-B-C` dates with the year first.
    pub year_first: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_description_words: 5,
            fallback_description: "Receipt scan".to_string(),
            day_first: false,
            year_first: false,
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format name (`json`, `csv` or `text`).
    pub default_format: String,

    /// Sort listings and exports by date, newest first.
    pub newest_first: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            newest_first: true,
        }
    }
}

impl SpendscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::from)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpendscanError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SpendscanConfig::default();
        assert_eq!(config.extraction.max_description_words, 5);
        assert_eq!(config.extraction.fallback_description, "Receipt scan");
        assert!(!config.extraction.day_first);
        assert_eq!(config.output.default_format, "json");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SpendscanConfig =
            serde_json::from_str(r#"{"extraction": {"day_first": true}}"#).unwrap();
        assert!(config.extraction.day_first);
        assert_eq!(config.extraction.max_description_words, 5);
        assert!(config.output.newest_first);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SpendscanConfig::default();
        config.extraction.max_description_words = 3;
        config.save(&path).unwrap();

        let loaded = SpendscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpendscanConfig::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SpendscanError::Config(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"extraction\": ").unwrap();

        let err = SpendscanConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, SpendscanError::Config(ConfigError::Format(_))));
    }
}
