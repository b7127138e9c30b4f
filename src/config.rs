//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once at startup, before the program under test is spawned.

use std::env;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_OUTPUT_LIMIT_BYTES, DEFAULT_TIME_LIMIT_MS};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub judge: JudgeConfig,
    pub logging: LoggingConfig,
}

/// Limits applied to each run of the program under test
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Wall-clock limit in milliseconds
    pub time_limit_ms: u64,
    /// Maximum accepted stdout size in bytes
    pub output_limit_bytes: u64,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// How log lines are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            judge: JudgeConfig::from_lookup(&lookup)?,
            logging: LoggingConfig::from_lookup(&lookup)?,
        })
    }
}

impl JudgeConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            time_limit_ms: parse_or(lookup, "JUDGE_TIME_LIMIT_MS", DEFAULT_TIME_LIMIT_MS)?,
            output_limit_bytes: parse_or(
                lookup,
                "JUDGE_OUTPUT_LIMIT_BYTES",
                DEFAULT_OUTPUT_LIMIT_BYTES,
            )?,
        })
    }
}

impl LoggingConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        };

        Ok(Self {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            format,
        })
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => {
            let value: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))?;
            if value == 0 {
                return Err(ConfigError::InvalidValue(key.to_string()));
            }
            Ok(value)
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
