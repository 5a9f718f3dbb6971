use crate::service_config::Config;
use crate::store::{FileStore, StoreError};

/// Shared handle threaded through every HTTP handler.
#[derive(Debug, Clone)]
pub struct State {
    store: FileStore,
}

impl State {
    pub async fn from_config(config: &Config) -> Result<Self, StateError> {
        let store = FileStore::open(&config.files_dir)?;
        tracing::info!(root = %store.root().display(), "file store opened");
        Ok(Self { store })
    }

    /// Build state directly over an existing store. Used by tests to
    /// point the service at an isolated temporary directory.
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
