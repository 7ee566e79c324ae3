//! Error types for the spendscan-core library.
//!
//! Extraction and classification are total and never produce these; they
//! cover the fallible edges around them (configuration and label parsing).

use thiserror::Error;

/// Main error type for the spendscan library.
#[derive(Error, Debug)]
pub enum SpendscanError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected schema.
    #[error("invalid configuration: {0}")]
    Format(#[from] serde_json::Error),
}

/// A string that is not one of the known category labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

/// Result type for the spendscan library.
pub type Result<T> = std::result::Result<T, SpendscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SpendscanError::from(ConfigError::from(json_err));
        assert!(err.to_string().starts_with("configuration error: invalid configuration"));
    }

    #[test]
    fn test_config_io_error_keeps_source() {
        let err = SpendscanError::from(ConfigError::Io {
            path: "/tmp/spendscan.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });

        assert_eq!(
            err.to_string(),
            "configuration error: failed to access /tmp/spendscan.json: gone"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
