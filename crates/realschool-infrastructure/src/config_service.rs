//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` under the RealSchool
//! config directory. A missing file yields defaults; it is never created.

use crate::paths::RealSchoolPaths;
use realschool_core::config::RootConfig;
use realschool_core::error::{RealSchoolError, Result};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Overrides `[api] base_url` when set.
pub const API_URL_ENV: &str = "REALSCHOOL_API_URL";

/// Loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &RealSchoolPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| RealSchoolError::config(e.to_string()))?;
        Ok(Self::from_path(path))
    }

    pub fn from_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A malformed file is an error so a typo is never silently replaced
    /// by defaults.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let mut loaded = self.load_config()?;
        apply_env_overrides(&mut loaded, std::env::var(API_URL_ENV).ok());

        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cached = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No config file, using defaults");
                return Ok(RootConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| {
            RealSchoolError::config(format!("{}: {}", self.path.display(), e))
        })
    }
}

fn apply_env_overrides(config: &mut RootConfig, api_url: Option<String>) {
    if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
        config.api.base_url = url;
    }
}
