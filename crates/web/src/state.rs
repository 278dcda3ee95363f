//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::JsonStore;
use crate::uploads::UploadStore;

/// Public URL prefix for uploaded images.
const UPLOADS_PUBLIC_BASE: &str = "/static/uploads";

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration, the JSON store
/// accessor, and the upload store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: JsonStore,
    uploads: UploadStore,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let store = JsonStore::new(&config.data_file);
        let uploads = UploadStore::new(&config.upload_dir, UPLOADS_PUBLIC_BASE);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                uploads,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the JSON store accessor.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }

    /// Get a reference to the upload store.
    #[must_use]
    pub fn uploads(&self) -> &UploadStore {
        &self.inner.uploads
    }
}
