//! Configuration handling for the card service connection.
//!
//! Configuration is stored in `.cardctl/config.yaml` relative to the working
//! directory. The only key today is the card service base URL.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::types::CONFIG_DIR;

/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Card service base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        // Ensure .cardctl directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the service base URL.
    ///
    /// The `CARDCTL_API_URL` environment variable takes precedence over the
    /// config file, which takes precedence over the built-in default.
    /// Trailing slashes are trimmed so joined request paths stay clean.
    pub fn api_url(&self) -> String {
        // First check environment variable
        if let Ok(url) = env::var("CARDCTL_API_URL")
            && !url.is_empty()
        {
            return url.trim_end_matches('/').to_string();
        }

        // Fall back to config file, then the default
        self.api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Set the service base URL, validating that it parses as a URL
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let parsed = url::Url::parse(url)
            .map_err(|e| CardError::Config(format!("invalid api_url '{}': {}", url, e)))?;
        self.api_url = Some(parsed.to_string().trim_end_matches('/').to_string());
        Ok(())
    }
}
