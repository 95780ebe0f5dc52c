use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{record_id, Collection, Document, RecordStore};
use crate::id::IdGenerator;
use crate::StoreError;

/// In-memory [`RecordStore`] with optional write-through to a JSON file.
///
/// Thread-safe via an interior `RwLock`; wrap it in `Arc` and share it.
/// When a data file is configured, every insert and replace rewrites the
/// whole document. A failed write rolls the in-memory change back, so the
/// caller sees either a fully applied operation or an error.
#[derive(Debug)]
pub struct MemoryStore {
    document: RwLock<Document>,
    ids: IdGenerator,
    data_file: Option<PathBuf>,
}

impl MemoryStore {
    /// An empty, purely in-memory store.
    pub fn new() -> Self {
        Self::from_document(Document::default())
    }

    /// A purely in-memory store seeded with `document`.
    ///
    /// Numeric ids are converted to strings and records without an id are
    /// given one.
    pub fn from_document(mut document: Document) -> Self {
        let ids = IdGenerator::new();
        normalize_ids(&mut document, &ids);
        Self {
            document: RwLock::new(document),
            ids,
            data_file: None,
        }
    }

    /// Open a store backed by `path`.
    ///
    /// The file is read if it exists, otherwise the store starts empty and
    /// the file is created on the first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let document = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Document>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Data file not found, starting empty");
                Document::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let mut store = Self::from_document(document);
        store.data_file = Some(path);
        Ok(store)
    }

    async fn persist(&self, document: &Document) -> Result<(), StoreError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn all(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        Ok(self.document.read().await.records(collection).clone())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Value>, StoreError> {
        let document = self.document.read().await;
        Ok(document
            .records(collection)
            .iter()
            .find(|r| record_id(r) == Some(id))
            .cloned())
    }

    async fn insert(&self, collection: Collection, record: Value) -> Result<Value, StoreError> {
        let Value::Object(mut fields) = record else {
            return Err(StoreError::corrupt(collection, "record must be a JSON object"));
        };
        fields.insert("id".to_string(), Value::String(self.ids.next_id()));
        let record = Value::Object(fields);

        let mut document = self.document.write().await;
        document.records_mut(collection).push(record.clone());

        if let Err(e) = self.persist(&document).await {
            document.records_mut(collection).pop();
            tracing::error!(error = %e, %collection, "Failed to persist insert, rolled back");
            return Err(e);
        }
        Ok(record)
    }

    async fn replace(
        &self,
        collection: Collection,
        id: &str,
        record: Value,
    ) -> Result<Option<Value>, StoreError> {
        let Value::Object(mut fields) = record else {
            return Err(StoreError::corrupt(collection, "record must be a JSON object"));
        };
        fields.insert("id".to_string(), Value::String(id.to_string()));
        let record = Value::Object(fields);

        let mut document = self.document.write().await;
        let Some(index) = document
            .records(collection)
            .iter()
            .position(|r| record_id(r) == Some(id))
        else {
            return Ok(None);
        };

        let previous = std::mem::replace(&mut document.records_mut(collection)[index], record.clone());

        if let Err(e) = self.persist(&document).await {
            document.records_mut(collection)[index] = previous;
            tracing::error!(error = %e, %collection, id, "Failed to persist replace, rolled back");
            return Err(e);
        }
        Ok(Some(record))
    }

    async fn count(&self, collection: Collection) -> Result<usize, StoreError> {
        Ok(self.document.read().await.records(collection).len())
    }
}

/// Give every record a string id.
fn normalize_ids(document: &mut Document, ids: &IdGenerator) {
    for collection in Collection::ALL {
        for record in document.records_mut(collection) {
            let Value::Object(fields) = record else {
                continue;
            };
            let id = match fields.get("id") {
                Some(Value::String(_)) => continue,
                Some(Value::Number(n)) => n.to_string(),
                _ => ids.next_id(),
            };
            fields.insert("id".to_string(), Value::String(id));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn seeded() -> MemoryStore {
        let document: Document = serde_json::from_value(json!({
            "client": [{"id": "C1", "name": "Acme"}],
            "event": [
                {"id": 7, "name": "Numeric"},
                {"name": "No id"}
            ]
        }))
        .unwrap();
        MemoryStore::from_document(document)
    }

    #[tokio::test]
    async fn seed_normalizes_ids() {
        let store = seeded();
        let events = store.all(Collection::Event).await.unwrap();
        assert_eq!(events[0]["id"], "7");
        assert!(events[1]["id"].is_string());
        assert_eq!(store.count(Collection::Brand).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_assigns_fresh_id_and_appends() {
        let store = seeded();
        let stored = store
            .insert(Collection::Client, json!({"id": "spoofed", "name": "Globex"}))
            .await
            .unwrap();
        assert_ne!(stored["id"], "spoofed");

        let all = store.all(Collection::Client).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], stored);
    }

    #[tokio::test]
    async fn insert_rejects_non_objects() {
        let store = MemoryStore::new();
        let err = store.insert(Collection::Client, json!([1, 2])).await.unwrap_err();
        assert_matches!(err, StoreError::Corrupt { collection: Collection::Client, .. });
    }

    #[tokio::test]
    async fn replace_keeps_id_and_position() {
        let store = seeded();
        let replaced = store
            .replace(Collection::Client, "C1", json!({"id": "other", "name": "Acme Corp"}))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced["id"], "C1");
        assert_eq!(
            store.find_by_id(Collection::Client, "C1").await.unwrap().unwrap()["name"],
            "Acme Corp"
        );
    }

    #[tokio::test]
    async fn replace_missing_returns_none() {
        let store = seeded();
        let result = store
            .replace(Collection::Client, "nope", json!({"name": "x"}))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn writes_are_persisted_and_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = MemoryStore::open(&path).await.unwrap();
        let stored = store
            .insert(Collection::Brand, json!({"name": "Spark", "client_id": "C1"}))
            .await
            .unwrap();

        let reopened = MemoryStore::open(&path).await.unwrap();
        let found = reopened
            .find_by_id(Collection::Brand, stored["id"].as_str().unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn failed_persist_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        // Reading a directory as the data file fails.
        let store = MemoryStore::open(dir.path()).await;
        assert_matches!(store, Err(StoreError::Io { .. }));

        let path = dir.path().join("missing").join("db.json");
        let store = MemoryStore::open(&path).await.unwrap();
        let err = store
            .insert(Collection::Event, json!({"name": "Lost"}))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Io { .. });
        assert_eq!(store.count(Collection::Event).await.unwrap(), 0);
    }
}
