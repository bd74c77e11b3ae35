//! Configuration management for CyberFit Pro.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read quietly if present so stdout stays reserved for responses.

use crate::domain::BRAZIL_DDI;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the validation service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Calling code assumed when a request omits one (default: "55")
    pub default_ddi: String,

    /// Cooldown between instructor invites from the same gym, in seconds (default: 60)
    pub invite_cooldown_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CYBERFIT_DEFAULT_DDI`: Calling code used when none is given (default: 55)
    /// - `CYBERFIT_INVITE_COOLDOWN_SECS`: Invite cooldown in seconds (default: 60)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let default_ddi =
            env::var("CYBERFIT_DEFAULT_DDI").unwrap_or_else(|_| BRAZIL_DDI.to_string());

        if default_ddi.is_empty()
            || default_ddi.len() > 3
            || !default_ddi.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidValue {
                var: "CYBERFIT_DEFAULT_DDI".to_string(),
                reason: format!("Must be 1 to 3 digits, got: {}", default_ddi),
            });
        }

        let invite_cooldown_secs = Self::parse_env_u64("CYBERFIT_INVITE_COOLDOWN_SECS", 60)?;
        if invite_cooldown_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CYBERFIT_INVITE_COOLDOWN_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            default_ddi,
            invite_cooldown_secs,
            log_level,
        })
    }

    pub fn invite_cooldown(&self) -> Duration {
        Duration::from_secs(self.invite_cooldown_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_ddi: BRAZIL_DDI.to_string(),
            invite_cooldown_secs: 60,
            log_level: "error".to_string(),
        }
    }
}
