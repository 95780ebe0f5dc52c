//! Repository layer: typed list, find, create and update operations over a
//! [`RecordStore`].
//!
//! Each entity gets a zero-sized repo struct whose methods take the store as
//! their first argument. List methods run the filter engine and the cursor
//! paginator; update methods fetch, merge and replace.

pub mod brand_repo;
pub mod client_repo;
pub mod event_repo;
pub mod project_repo;

pub use brand_repo::BrandRepo;
pub use client_repo::ClientRepo;
pub use event_repo::EventRepo;
pub use project_repo::ProjectRepo;

use brandhub_core::filter::{Filter, Listable};
use brandhub_core::merge::Merge;
use brandhub_core::pagination::{clamp_limit, paginate, Page};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::store::{record_id, Collection, RecordStore};
use crate::StoreError;

/// Resolved list parameters shared by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring matched against `name`.
    pub search_term: Option<String>,
    /// Page size, already clamped.
    pub limit: usize,
    /// Cursor: id of the last record of the previous page.
    pub last_id: Option<String>,
    /// Cap on reachable records when the list carries no filter at all.
    pub unfiltered_cap: Option<usize>,
}

impl ListQuery {
    /// A query with the default limit and no search, cursor or cap.
    pub fn new() -> Self {
        Self {
            limit: clamp_limit(None),
            ..Self::default()
        }
    }

    /// The base filter for this query: search term plus the unfiltered cap.
    /// Callers add their own field predicates.
    pub fn filter(&self) -> Filter {
        let filter = Filter::new().with_search(self.search_term.as_deref());
        match self.unfiltered_cap {
            Some(cap) => filter.with_unfiltered_cap(cap),
            None => filter,
        }
    }
}

/// Filter and paginate every record of `collection`.
///
/// Records that do not decode into `T` are skipped with a warning; one bad
/// record never fails the whole list.
async fn list_page<T>(
    store: &dyn RecordStore,
    collection: Collection,
    filter: Filter,
    query: &ListQuery,
) -> Result<Page<T>, StoreError>
where
    T: Listable + DeserializeOwned,
{
    let records: Vec<T> = store
        .all(collection)
        .await?
        .into_iter()
        .filter_map(|r| {
            let id = record_id(&r).unwrap_or_default().to_string();
            match serde_json::from_value(r) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(%collection, id = %id, error = %e, "Skipping undecodable record");
                    None
                }
            }
        })
        .collect();

    let filtered = filter.apply(records);
    Ok(paginate(filtered, query.limit, query.last_id.as_deref()))
}

/// Fetch and decode one record.
async fn find<T: DeserializeOwned>(
    store: &dyn RecordStore,
    collection: Collection,
    id: &str,
) -> Result<Option<T>, StoreError> {
    store
        .find_by_id(collection, id)
        .await?
        .map(|r| decode(collection, r))
        .transpose()
}

/// Encode `model`, insert it, and decode the stored record (which now
/// carries its assigned id).
async fn insert<T>(store: &dyn RecordStore, collection: Collection, model: &T) -> Result<T, StoreError>
where
    T: Serialize + DeserializeOwned,
{
    let stored = store.insert(collection, serde_json::to_value(model)?).await?;
    decode(collection, stored)
}

/// Fetch the current record, merge `patch` into it and persist the result.
///
/// Returns `None` if the record does not exist. The returned value is
/// exactly what was persisted.
async fn merge_update<T>(
    store: &dyn RecordStore,
    collection: Collection,
    id: &str,
    patch: &T::Patch,
) -> Result<Option<T>, StoreError>
where
    T: Merge + Serialize + DeserializeOwned,
{
    let Some(current) = find::<T>(store, collection, id).await? else {
        return Ok(None);
    };
    let next = current.merge(patch);
    let replaced = store
        .replace(collection, id, serde_json::to_value(&next)?)
        .await?;
    Ok(replaced.map(|_| next))
}

fn decode<T: DeserializeOwned>(collection: Collection, record: Value) -> Result<T, StoreError> {
    serde_json::from_value(record).map_err(|e| StoreError::corrupt(collection, e.to_string()))
}
