//! Composition root shared by every screen.

use realschool_core::config::RootConfig;
use realschool_core::directory::AttendanceApi;
use realschool_core::error::{RealSchoolError, Result};
use realschool_core::navigation::{Navigator, Notifier};
use realschool_core::session::{SessionGuard, SessionStore};
use realschool_infrastructure::{FileSessionStore, HttpAttendanceApi, RealSchoolPaths};
use std::sync::Arc;

/// Everything a screen needs, built once at startup and passed explicitly.
#[derive(Clone)]
pub struct AppContext {
    guard: Arc<SessionGuard>,
    api: Arc<dyn AttendanceApi>,
}

impl AppContext {
    pub fn new(guard: Arc<SessionGuard>, api: Arc<dyn AttendanceApi>) -> Self {
        Self { guard, api }
    }

    /// Wires the file-backed session store and the HTTP client.
    pub fn from_config(
        config: &RootConfig,
        paths: &RealSchoolPaths,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let session_file = paths
            .session_file()
            .map_err(|e| RealSchoolError::config(e.to_string()))?;
        tracing::debug!(path = %session_file.display(), "Using session file");

        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(session_file));
        let api = Arc::new(HttpAttendanceApi::new(&config.api)?);
        let guard = Arc::new(SessionGuard::new(store, navigator, notifier));

        Ok(Self::new(guard, api))
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    pub fn api(&self) -> &dyn AttendanceApi {
        self.api.as_ref()
    }
}
