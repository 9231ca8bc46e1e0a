//! Process configuration
//!
//! The service credential and target assistant id are required at startup;
//! everything else has defaults.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub assistant_id: String,
    pub base_url: String,
    pub port: u16,
    pub poll_interval: Duration,
    pub run_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require("OPENAI_API_KEY")?,
            assistant_id: require("OPENAI_ASSISTANT_ID")?,
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            port: parse_or("RELAY_PORT", 8000)?,
            poll_interval: Duration::from_millis(parse_or("RELAY_POLL_INTERVAL_MS", 1000)?),
            run_timeout: Duration::from_secs(parse_or("RELAY_RUN_TIMEOUT_SECS", 120)?),
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value: raw }),
        Err(_) => Ok(default),
    }
}
