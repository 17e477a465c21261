//! Query-service configuration.
//!
//! Loaded from a TOML file or the environment (`PERMENET_ENDPOINT`,
//! `PERMENET_TIMEOUT_SECS`), with sensible local defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PermenetError, Result};

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote permeability query service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), timeout_secs: default_timeout_secs() }
    }
}

impl ServiceConfig {
    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PermenetError::Config(format!("cannot read config file: {}", e)))?;
        toml::from_str(&raw)
            .map_err(|e| PermenetError::Config(format!("cannot parse config file: {}", e)))
    }

    /// Load from the environment, falling back to defaults. Reads a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var("PERMENET_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(raw) = std::env::var("PERMENET_TIMEOUT_SECS") {
            config.timeout_secs = raw
                .parse()
                .map_err(|_| PermenetError::Config(format!("invalid PERMENET_TIMEOUT_SECS: {}", raw)))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: ServiceConfig =
            toml::from_str(r#"endpoint = "https://permenet.example.org/graphql""#).unwrap();
        assert_eq!(config.endpoint, "https://permenet.example.org/graphql");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
