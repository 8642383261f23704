//! Error types for typefield-core.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading add-on configuration.
///
/// Classification itself never fails; only configuration retrieval does.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::from(err);
        assert!(error.to_string().starts_with("invalid config JSON: "));
    }

    #[test]
    fn io_error_display() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = ConfigError::from(err);
        assert_eq!(error.to_string(), "failed to read config file: missing");
    }
}
