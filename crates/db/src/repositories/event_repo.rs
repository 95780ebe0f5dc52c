//! Repository for the `event` collection.

use brandhub_core::pagination::Page;
use brandhub_core::types::now_timestamp;

use super::{find, insert, list_page, merge_update, ListQuery};
use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::models::without_keys;
use crate::store::{Collection, RecordStore};
use crate::StoreError;

/// Provides list, lookup, create and update operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List the events of one brand.
    pub async fn list_by_brand(
        store: &dyn RecordStore,
        brand_id: &str,
        query: &ListQuery,
    ) -> Result<Page<Event>, StoreError> {
        let filter = query.filter().with_field("brand_id", brand_id);
        list_page(store, Collection::Event, filter, query).await
    }

    /// Find an event by id.
    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<Event>, StoreError> {
        find(store, Collection::Event, id).await
    }

    /// Insert a new event under `brand_id`, stamped with `created_by` and
    /// the current time.
    pub async fn create(
        store: &dyn RecordStore,
        brand_id: &str,
        created_by: &str,
        input: &CreateEvent,
    ) -> Result<Event, StoreError> {
        let event = Event {
            id: String::new(),
            brand_id: brand_id.to_string(),
            name: input.name.clone(),
            created_by: created_by.to_string(),
            created_at: now_timestamp(),
            extra: without_keys(input.extra.clone(), Event::FIELDS),
        };
        insert(store, Collection::Event, &event).await
    }

    /// Apply a flat partial update. Returns `None` if the event does not exist.
    pub async fn update(
        store: &dyn RecordStore,
        id: &str,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, StoreError> {
        merge_update(store, Collection::Event, id, input).await
    }
}
