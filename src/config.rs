// ABOUTME: Configuration module for the smartpitch application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::client::ClientConfig;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/generate";

/// Global configuration for the application
pub struct Config {
    pub endpoint: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let endpoint =
            env::var("SMARTPITCH_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let output_dir = env::var("SMARTPITCH_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            endpoint,
            output_dir,
        }
    }

    /// Get a client configuration, preferring an explicit endpoint override
    pub fn get_client_config(&self, endpoint: Option<String>) -> ClientConfig {
        ClientConfig {
            endpoint: endpoint.unwrap_or_else(|| self.endpoint.clone()),
        }
    }
}
