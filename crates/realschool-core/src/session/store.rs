//! Persisted session storage port.

use crate::error::SessionError;
use async_trait::async_trait;

/// Fixed key under which the session record is stored. File-backed stores
/// append their format extension.
pub const SESSION_RECORD_KEY: &str = "session";

/// Client-local persistent storage for the single session record.
///
/// The store deals in raw text: parsing and validation belong to the guard,
/// so a corrupt record can be detected and cleared in one place.
///
/// Implementations report any backend failure as
/// [`SessionError::StorageUnavailable`]. Removing an absent record succeeds.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the raw record, `Ok(None)` when nothing is stored.
    async fn read(&self) -> Result<Option<String>, SessionError>;

    /// Replaces the stored record.
    async fn write(&self, record: &str) -> Result<(), SessionError>;

    /// Removes the stored record.
    async fn remove(&self) -> Result<(), SessionError>;
}
