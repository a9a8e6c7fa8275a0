//! Unified path management for RealSchool client files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/realschool/        # Config directory (platform default)
//! ├── config.toml              # Client configuration
//! └── session.json             # Persisted session record
//! ```
//!
//! Setting `REALSCHOOL_HOME` relocates the whole tree.

use realschool_core::session::SESSION_RECORD_KEY;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "REALSCHOOL_HOME";
const APP_DIR: &str = "realschool";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolver rooted either at an explicit base or the platform default.
#[derive(Debug, Clone)]
pub struct RealSchoolPaths {
    base: Option<PathBuf>,
}

impl RealSchoolPaths {
    /// Creates a resolver. `base` wins over `REALSCHOOL_HOME`, which wins
    /// over the platform config directory.
    pub fn new(base: Option<&Path>) -> Self {
        let base = base
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(HOME_ENV).map(PathBuf::from));
        Self { base }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Location of the single session record.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(format!("{}.json", SESSION_RECORD_KEY)))
    }
}

impl Default for RealSchoolPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
