//! The record store service.
//!
//! Handlers never reach for a global: they are handed a [`SharedStore`] at
//! startup and talk to it through the [`RecordStore`] trait. Records travel
//! as JSON objects; the repositories convert them to typed models.

mod memory;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use memory::MemoryStore;

use crate::StoreError;

/// The named collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Client,
    Brand,
    Project,
    Event,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Client,
        Collection::Brand,
        Collection::Project,
        Collection::Event,
    ];

    /// Collection key as it appears in the data file.
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Client => "client",
            Collection::Brand => "brand",
            Collection::Project => "project",
            Collection::Event => "event",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage interface used by the repositories.
///
/// Every collection keeps records in insertion order; `all` returns them in
/// that order.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record of `collection`, in insertion order.
    async fn all(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    /// The record whose `id` equals `id`, if any.
    async fn find_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Value>, StoreError>;

    /// Append a record, assigning it a fresh `id`. Returns the stored record.
    async fn insert(&self, collection: Collection, record: Value) -> Result<Value, StoreError>;

    /// Replace the record whose `id` equals `id`. The stored record keeps
    /// that id whatever `record` carries.
    ///
    /// Returns `None` if no such record exists.
    async fn replace(
        &self,
        collection: Collection,
        id: &str,
        record: Value,
    ) -> Result<Option<Value>, StoreError>;

    /// Number of records in `collection`.
    async fn count(&self, collection: Collection) -> Result<usize, StoreError>;
}

/// Store handle shared across handlers.
pub type SharedStore = Arc<dyn RecordStore>;

/// On-disk layout of the data file: one array per collection.
///
/// Collections missing from the file start empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub client: Vec<Value>,
    pub brand: Vec<Value>,
    pub project: Vec<Value>,
    pub event: Vec<Value>,
}

impl Document {
    pub fn records(&self, collection: Collection) -> &Vec<Value> {
        match collection {
            Collection::Client => &self.client,
            Collection::Brand => &self.brand,
            Collection::Project => &self.project,
            Collection::Event => &self.event,
        }
    }

    pub fn records_mut(&mut self, collection: Collection) -> &mut Vec<Value> {
        match collection {
            Collection::Client => &mut self.client,
            Collection::Brand => &mut self.brand,
            Collection::Project => &mut self.project,
            Collection::Event => &mut self.event,
        }
    }
}

/// The `id` of a stored record, if it has a string one.
pub(crate) fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}
