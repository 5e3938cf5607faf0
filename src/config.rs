//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first when present.

use crate::services::{ActorDefaults, NormalizerOptions};
use std::env;

/// Default cap on request bodies (1 MiB).
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Fallbacks for actor fields missing from activity items
    pub actor_defaults: ActorDefaults,
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            actor_defaults: ActorDefaults::Legacy,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let actor_defaults = match env::var("ACTOR_DEFAULTS") {
            Ok(raw) => raw.parse::<ActorDefaults>().map_err(|reason| ConfigError::Invalid {
                var: "ACTOR_DEFAULTS",
                reason,
            })?,
            Err(_) => ActorDefaults::default(),
        };

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(raw) => parse_body_limit(&raw).map_err(|reason| ConfigError::Invalid {
                var: "MAX_BODY_BYTES",
                reason,
            })?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            actor_defaults,
            max_body_bytes,
        })
    }

    /// Normalizer options derived from this config.
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            actor_defaults: self.actor_defaults,
        }
    }
}

fn parse_body_limit(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
