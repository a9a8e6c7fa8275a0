//! In-memory doubles for the session and navigation ports.
//!
//! Used by tests across the workspace and by callers that want an
//! ephemeral, non-persisted session.

use crate::error::SessionError;
use crate::navigation::{Navigator, Notification, Notifier, Route};
use crate::session::SessionStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Session store backed by a single in-memory slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
    remove_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new(record: Option<&str>) -> Self {
        Self {
            record: Mutex::new(record.map(str::to_string)),
            remove_calls: AtomicUsize::new(0),
        }
    }

    pub fn record(&self) -> Option<String> {
        lock(&self.record).clone()
    }

    /// How many times `remove` has been called.
    pub fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(self.record())
    }

    async fn write(&self, record: &str) -> Result<(), SessionError> {
        *lock(&self.record) = Some(record.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<(), SessionError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        *lock(&self.record) = None;
        Ok(())
    }
}

/// Session store whose every operation fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

#[async_trait]
impl SessionStore for FailingStore {
    async fn read(&self) -> Result<Option<String>, SessionError> {
        Err(SessionError::storage("storage disabled"))
    }

    async fn write(&self, _record: &str) -> Result<(), SessionError> {
        Err(SessionError::storage("storage disabled"))
    }

    async fn remove(&self) -> Result<(), SessionError> {
        Err(SessionError::storage("storage disabled"))
    }
}

/// Navigator that remembers every route it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        lock(&self.routes).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        lock(&self.routes).push(route);
    }
}

/// Notifier that remembers every notification.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.notifications).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        lock(&self.notifications).push(notification);
    }
}
