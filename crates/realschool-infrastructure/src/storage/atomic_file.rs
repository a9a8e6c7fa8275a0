//! Crash-safe single-record files.
//!
//! Writes go to a hidden sibling and are renamed over the target after an
//! fsync, so a reader never observes a half-written record.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum AtomicFileError {
    Io(std::io::Error),
    Lock(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::Io(e)
    }
}

/// Handle to a text file replaced atomically as a whole.
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. Only a missing file reads as `None`.
    ///
    /// Any existing content is returned, blank or not valid UTF-8 included
    /// (lossily decoded), so the caller can reject and clear it.
    pub fn load(&self) -> Result<Option<String>, AtomicFileError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the whole file with `contents` under an exclusive lock.
    pub fn save(&self, contents: &str) -> Result<(), AtomicFileError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(contents.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Deletes the file. Removing a file that is already gone succeeds.
    pub fn remove(&self) -> Result<(), AtomicFileError> {
        let _lock = match FileLock::acquire(&self.path) {
            Ok(lock) => lock,
            // Nothing to remove when the directory itself is missing.
            Err(AtomicFileError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicFileError> {
        let invalid = |what: &str| {
            AtomicFileError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path has no {}", what),
            ))
        };
        let parent = self.path.parent().ok_or_else(|| invalid("parent directory"))?;
        let file_name = self.path.file_name().ok_or_else(|| invalid("file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive advisory lock held for the lifetime of the guard.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicFileError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("session.json"));

        file.save(r#"{"identity":"1"}"#).unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some(r#"{"identity":"1"}"#));

        file.save("second").unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_missing_file_reads_as_none_but_junk_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("session.json"));
        assert_eq!(file.load().unwrap(), None);

        fs::write(file.path(), "  \n").unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("  \n"));

        fs::write(file.path(), [0xff, 0xfe, b'{']).unwrap();
        assert_eq!(file.load().unwrap().as_deref(), Some("\u{fffd}\u{fffd}{"));
    }

    #[test]
    fn test_save_creates_parent_and_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("session.json");
        let file = AtomicFile::new(path.clone());

        file.save("{}").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("nested").join(".session.json.tmp").exists());
        assert!(!temp_dir.path().join("nested").join("session.lock").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("session.json"));
        file.save("{}").unwrap();

        file.remove().unwrap();
        assert_eq!(file.load().unwrap(), None);
        file.remove().unwrap();

        let orphan = AtomicFile::new(temp_dir.path().join("gone").join("session.json"));
        orphan.remove().unwrap();
    }
}
