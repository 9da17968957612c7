//! Application configuration.
//!
//! Mirrors the deployment environment: remote API endpoint and credential,
//! feature flags, and the durable-storage key each store owns. The core
//! treats every one of these as externally supplied; nothing here is
//! hardcoded at the use sites.
//!
//! Configuration is stored at `~/.config/playshelf/config.json`. A missing
//! file means defaults.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "playshelf";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default remote catalog endpoint (RAWG)
const DEFAULT_API_URL: &str = "https://api.rawg.io/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub production: bool,
    /// Base URL of the remote catalog API.
    pub api_url: String,
    /// Credential for the remote catalog API. Remote refresh stays off
    /// without one.
    pub api_key: Option<String>,
    pub features: FeatureFlags,
    pub storage_keys: StorageKeys,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Fill the initial catalog from the remote API instead of the built-in
    /// seed.
    pub remote_fetch: bool,
    pub analytics: bool,
    pub logging: bool,
}

/// Durable-storage keys. Each key is owned exclusively by one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub session: String,
    pub users: String,
    pub catalog: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            production: false,
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            features: FeatureFlags::default(),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            remote_fetch: false,
            analytics: false,
            logging: true,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            session: "app_demo_auth".to_string(),
            users: "users".to_string(),
            catalog: "local_games_demo".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Root directory for file-backed durable storage.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}
