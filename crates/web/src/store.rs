//! JSON-file storage accessor.
//!
//! The whole application state lives in one JSON document (`Store`). This
//! module owns that file exclusively: handlers go through [`JsonStore`] to
//! load the document, mutate it in memory, and write the whole thing back.
//!
//! A `tokio` mutex serializes load+mutate+save critical sections within this
//! process. Writes are whole-file overwrites with no atomic rename, so a
//! concurrent writer from another process would still race (last writer
//! wins); that is an accepted limitation of the file-as-database design, and
//! the accessor boundary is what would let a real embedded database replace
//! it without touching callers.

use std::path::{Path, PathBuf};

use billbook_core::Store;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors from the storage accessor.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but is not a valid store document.
    ///
    /// Fatal: surfaced as a server error, never auto-repaired.
    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the backing file failed.
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Accessor for the single JSON store document.
pub struct JsonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Create an accessor for the document at `path`.
    ///
    /// The file is not created or touched until the first write; a missing
    /// file reads as the default empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current store document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the file holds invalid JSON or the
    /// wrong shape, `StoreError::Io` if it cannot be read.
    pub async fn read(&self) -> Result<Store, StoreError> {
        let _guard = self.lock.lock().await;
        self.load()
    }

    /// Load the store, apply `mutate`, and write the whole document back.
    ///
    /// The closure's return value is passed through, so callers can hand back
    /// whatever they derived while holding the critical section.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the document cannot be loaded or written. A
    /// failed write leaves whatever the filesystem got to; the previous
    /// content is not restored.
    pub async fn update<T>(&self, mutate: impl FnOnce(&mut Store) -> T) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        let mut store = self.load()?;
        let out = mutate(&mut store);
        self.persist(&store)?;
        Ok(out)
    }

    fn load(&self) -> Result<Store, StoreError> {
        if !self.path.exists() {
            return Ok(Store::default());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&self, store: &Store) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        // Pretty-printed to keep the document hand-inspectable.
        let raw = serde_json::to_string_pretty(store).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source: std::io::Error::other(source),
        })?;
        std::fs::write(&self.path, raw).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
