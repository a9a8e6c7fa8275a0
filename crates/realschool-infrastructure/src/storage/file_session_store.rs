//! File-backed [`SessionStore`].

use super::atomic_file::{AtomicFile, AtomicFileError};
use async_trait::async_trait;
use realschool_core::error::SessionError;
use realschool_core::session::SessionStore;
use std::path::PathBuf;
use tokio::task;

/// Stores the session record as a single JSON file.
///
/// All file work runs on the blocking pool; failures surface as
/// [`SessionError::StorageUnavailable`].
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    file: AtomicFile,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    async fn run<T, F>(&self, op: F) -> Result<T, SessionError>
    where
        T: Send + 'static,
        F: FnOnce(AtomicFile) -> Result<T, AtomicFileError> + Send + 'static,
    {
        let file = self.file.clone();
        task::spawn_blocking(move || op(file))
            .await
            .map_err(|e| SessionError::storage(format!("Failed to spawn blocking task: {}", e)))?
            .map_err(|e| SessionError::storage(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self) -> Result<Option<String>, SessionError> {
        self.run(|file| file.load()).await
    }

    async fn write(&self, record: &str) -> Result<(), SessionError> {
        let record = record.to_string();
        self.run(move |file| file.save(&record)).await?;
        tracing::debug!(path = %self.file.path().display(), "Session record saved");
        Ok(())
    }

    async fn remove(&self) -> Result<(), SessionError> {
        self.run(|file| file.remove()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realschool_core::session::SessionGuard;
    use realschool_core::testing::{RecordingNavigator, RecordingNotifier};
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn guard_over(path: &Path) -> SessionGuard {
        SessionGuard::new(
            Arc::new(FileSessionStore::new(path.to_path_buf())),
            Arc::new(RecordingNavigator::default()),
            Arc::new(RecordingNotifier::default()),
        )
    }

    #[tokio::test]
    async fn test_write_read_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session.json"));

        assert_eq!(store.read().await.unwrap(), None);

        store.write(r#"{"identity":"1"}"#).await.unwrap();
        assert_eq!(
            store.read().await.unwrap().as_deref(),
            Some(r#"{"identity":"1"}"#)
        );

        store.remove().await.unwrap();
        assert_eq!(store.read().await.unwrap(), None);
        store.remove().await.unwrap();
    }

    #[tokio::test]
    async fn test_unreadable_path_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text.
        let path = temp_dir.path().join("session.json");
        std::fs::create_dir(&path).unwrap();

        let store = FileSessionStore::new(path);
        assert!(matches!(
            store.read().await,
            Err(SessionError::StorageUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_guard_clears_unparseable_files() {
        let contents: [&[u8]; 4] = [b"", b"  \n\t", &[0xc3, 0x28, 0xff], b"not json"];

        for content in contents {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("session.json");
            std::fs::write(&path, content).unwrap();

            let snapshot = guard_over(&path).load_session().await;

            assert_eq!(snapshot.session, None, "content {:?}", content);
            assert!(!path.exists(), "content {:?} was not cleared", content);
        }
    }
}
