//! SQLite collection store.

use super::{CollectionStore, Result, StoreError};
use aniracetam_core::ReviewableItem;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

/// File name inside the data directory.
pub const FILE_NAME: &str = "sentences.db";

/// Row as stored, before the timestamp is parsed.
struct ItemRow {
    id: i64,
    source_text: String,
    target_text: String,
    target_language: String,
    next_review_at: String,
    interval_days: u32,
    ease: f64,
    repetitions: u32,
}

impl ItemRow {
    fn into_item(self) -> Result<ReviewableItem> {
        let next_review_at = DateTime::parse_from_rfc3339(&self.next_review_at)
            .map_err(|e| {
                StoreError::InvalidData(format!(
                    "item {}: bad next_review_at {:?}: {e}",
                    self.id, self.next_review_at
                ))
            })?
            .with_timezone(&Utc);

        Ok(ReviewableItem {
            id: self.id,
            source_text: self.source_text,
            target_text: self.target_text,
            target_language: self.target_language,
            next_review_at,
            interval_days: self.interval_days,
            ease: self.ease,
            repetitions: self.repetitions,
        })
    }
}

/// SQLite-backed store. One row per item.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        Ok(())
    }
}

impl CollectionStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<ReviewableItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, source_text, target_text, target_language, next_review_at, interval_days, ease, repetitions
             FROM items ORDER BY position",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ItemRow {
                    id: row.get(0)?,
                    source_text: row.get(1)?,
                    target_text: row.get(2)?,
                    target_language: row.get(3)?,
                    next_review_at: row.get(4)?,
                    interval_days: row.get(5)?,
                    ease: row.get(6)?,
                    repetitions: row.get(7)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let items = rows
            .into_iter()
            .map(ItemRow::into_item)
            .collect::<Result<Vec<_>>>()?;
        tracing::info!(count = items.len(), "loaded collection from sqlite");
        Ok(items)
    }

    fn save_all(&self, items: &[ReviewableItem]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM items", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO items (id, position, source_text, target_text, target_language, next_review_at, interval_days, ease, repetitions)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for (position, item) in items.iter().enumerate() {
                stmt.execute(params![
                    item.id,
                    position as i64,
                    item.source_text,
                    item.target_text,
                    item.target_language,
                    item.next_review_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                    item.interval_days,
                    item.ease,
                    item.repetitions,
                ])?;
            }
        }
        tx.commit()?;
        tracing::info!(count = items.len(), "saved collection to sqlite");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 20, 18, 45, 0).unwrap()
    }

    #[test]
    fn empty_database_loads_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut reviewed = ReviewableItem::new(9, "How much is it?", "Wie viel kostet das?", "de", now());
        reviewed.interval_days = 15;
        reviewed.ease = 2.22;
        reviewed.repetitions = 3;
        reviewed.next_review_at = now() + Duration::days(15);
        let items = vec![
            reviewed,
            ReviewableItem::new(3, "Excuse me", "Entschuldigung", "de", now()),
        ];

        store.save_all(&items).unwrap();
        assert_eq!(store.load_all().unwrap(), items);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .save_all(&[
                ReviewableItem::new(1, "a", "b", "it", now()),
                ReviewableItem::new(2, "c", "d", "it", now()),
            ])
            .unwrap();
        store
            .save_all(&[ReviewableItem::new(2, "c", "d", "it", now())])
            .unwrap();

        let ids: Vec<i64> = store.load_all().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn corrupt_timestamp_is_invalid_data() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO items (id, position, source_text, target_text, target_language, next_review_at)
                 VALUES (1, 0, 'a', 'b', 'es', 'yesterday')",
                [],
            )
            .unwrap();
        assert!(matches!(
            store.load_all().unwrap_err(),
            StoreError::InvalidData(_)
        ));
    }
}
