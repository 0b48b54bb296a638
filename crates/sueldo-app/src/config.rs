// File: src/config.rs
// Purpose: Configuration parsing from sueldo.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sueldo_router::RouterConfig;
use tracing::debug;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "sueldo.toml";

/// Environment variable holding the build-time base URL
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub routing: RouterConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Overrides the base path when a base URL is given
    ///
    /// Blank values are ignored.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(base) = base_url.filter(|b| !b.trim().is_empty()) {
            debug!(base, "base path overridden");
            self.routing = self.routing.with_base_path(base);
        }
        self
    }
}
