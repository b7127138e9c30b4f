//! Custom error types and handling
//!
//! This module defines the judge's error types. A wrong answer is never an
//! error: it is a verdict. Errors here mean the judge itself could not do
//! its job.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to start program {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => "SPAWN_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::Spawn {
            program: "./missing".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.error_code(), "SPAWN_ERROR");
        assert!(err.to_string().contains("./missing"));

        let err: AppError = ConfigError::InvalidValue("JUDGE_TIME_LIMIT_MS".into()).into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
