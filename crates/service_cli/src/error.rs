//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Run-level failures. Per-instrument pricing failures are reported and
/// skipped, never surfaced here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound("data/missing.json".to_string());
        assert_eq!(err.to_string(), "File not found: data/missing.json");

        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error: Invalid log level: loud"));
    }
}
