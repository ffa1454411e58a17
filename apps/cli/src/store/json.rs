//! JSON file collection store.

use super::{CollectionStore, Result, StoreError};
use aniracetam_core::ReviewableItem;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name inside the data directory.
pub const FILE_NAME: &str = "sentences.json";

/// Stores the whole collection as one pretty-printed JSON array.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CollectionStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<ReviewableItem>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no collection file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<ReviewableItem> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(count = items.len(), path = %self.path.display(), "loaded collection");
        Ok(items)
    }

    fn save_all(&self, items: &[ReviewableItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Written to a sibling file, then renamed over the target.
        let tmp = self.path.with_extension("json.tmp");
        let file = fs::File::create(&tmp).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, items).map_err(|source| StoreError::Json {
            path: tmp.clone(),
            source,
        })?;
        writer.flush().map_err(|e| self.io_error(e))?;
        drop(writer);
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::info!(count = items.len(), path = %self.path.display(), "saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<ReviewableItem> {
        let now = Utc.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap();
        let mut second = ReviewableItem::new(2, "See you tomorrow", "Hasta mañana", "es", now);
        second.next_review_at = now + Duration::days(6);
        second.interval_days = 6;
        second.repetitions = 2;
        vec![
            ReviewableItem::new(1, "Good night", "Buenas noches", "es", now),
            second,
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(FILE_NAME));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join(FILE_NAME));
        let items = sample();
        store.save_all(&items).unwrap();
        assert_eq!(store.load_all().unwrap(), items);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        // the broken file is left alone
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn reads_collection_written_with_legacy_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(
            &path,
            r#"[
  {
    "id": 1,
    "original": "Hello",
    "translated": "Hola",
    "language": "es",
    "nextReview": "2024-02-02T12:00:00.000Z",
    "interval": 1,
    "ease": 2.5,
    "repetitions": 0
  }
]"#,
        )
        .unwrap();
        let items = JsonFileStore::new(&path).load_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].target_text, "Hola");
    }
}
