use std::sync::Arc;

use folio_db::store::{
    JsonFileStore, MemoryStore, RecordStore, SqlStore, StoreBackend, StoreResult,
};

use crate::config::ServerConfig;
use crate::images::ImageStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Projects and contact messages, whichever backend holds them.
    pub store: Arc<dyn RecordStore>,
    /// Where uploaded project images go.
    pub images: Arc<ImageStorage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, images: ImageStorage, config: ServerConfig) -> Self {
        Self {
            store,
            images: Arc::new(images),
            config: Arc::new(config),
        }
    }

    /// Open the configured backend and pair it with its image storage: files
    /// under the data directory for the JSON backend, inline data otherwise.
    pub async fn open(config: ServerConfig) -> StoreResult<Self> {
        let (store, images): (Arc<dyn RecordStore>, ImageStorage) = match config.store_backend {
            StoreBackend::Memory => (Arc::new(MemoryStore::new()), ImageStorage::Inline),
            StoreBackend::JsonFile => (
                Arc::new(JsonFileStore::open(&config.data_dir).await?),
                ImageStorage::Directory {
                    root: config.upload_dir(),
                },
            ),
            StoreBackend::Sqlite => (
                Arc::new(SqlStore::connect(&config.database_url).await?),
                ImageStorage::Inline,
            ),
        };
        tracing::info!(backend = %store.backend(), "Record store ready");

        Ok(Self::new(store, images, config))
    }
}
