//! Persistence for the sentence collection.

pub mod error;
pub mod json;
pub mod schema;
pub mod sqlite;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use sqlite::SqliteStore;

use aniracetam_core::ReviewableItem;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub type Result<T> = std::result::Result<T, StoreError>;

/// A flat, order-preserving collection of items.
///
/// `save_all` replaces whatever was stored before.
pub trait CollectionStore {
    fn load_all(&self) -> Result<Vec<ReviewableItem>>;
    fn save_all(&self, items: &[ReviewableItem]) -> Result<()>;
}

/// Storage backend selected in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    Json,
    Sqlite,
}

impl Default for StorageKind {
    fn default() -> Self {
        Self::Json
    }
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Open the configured store inside `data_dir`.
pub fn open_store(kind: StorageKind, data_dir: &Path) -> Result<Box<dyn CollectionStore>> {
    let store: Box<dyn CollectionStore> = match kind {
        StorageKind::Json => Box::new(JsonFileStore::new(data_dir.join(json::FILE_NAME))),
        StorageKind::Sqlite => Box::new(SqliteStore::open(data_dir.join(sqlite::FILE_NAME))?),
    };
    tracing::debug!(backend = kind.as_str(), dir = %data_dir.display(), "opened collection store");
    Ok(store)
}

/// Id for the next new item. Ids are never handed out twice.
pub fn next_id(items: &[ReviewableItem]) -> i64 {
    items.iter().map(|i| i.id).max().unwrap_or(0) + 1
}
