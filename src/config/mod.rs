use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub storage: StorageConfig,
}

/// Settings of the web application that serves resolved branding files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub base_url: String, // This is the ONLY mandatory field
    /// URL path prefix under which branding resources are served
    #[serde(default = "default_resource_trigger")]
    pub resource_trigger: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding one subdirectory per branding slot
    #[serde(default = "default_rebrand_path")]
    pub rebrand_path: PathBuf,
}

// Web defaults
fn default_resource_trigger() -> String {
    DEFAULT_RESOURCE_TRIGGER.to_string()
}

// Storage defaults
fn default_rebrand_path() -> PathBuf {
    PathBuf::from(DEFAULT_REBRAND_PATH)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                base_url: "http://localhost:8080".to_string(),
                resource_trigger: default_resource_trigger(),
            },
            storage: StorageConfig {
                rebrand_path: default_rebrand_path(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}
