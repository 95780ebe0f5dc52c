//! Repository for the `client` collection.

use brandhub_core::pagination::Page;

use super::{find, insert, list_page, merge_update, ListQuery};
use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::models::without_keys;
use crate::store::{Collection, RecordStore};
use crate::StoreError;

/// Provides list, lookup, create and update operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List clients, optionally narrowed by the query's search term.
    pub async fn list(store: &dyn RecordStore, query: &ListQuery) -> Result<Page<Client>, StoreError> {
        list_page(store, Collection::Client, query.filter(), query).await
    }

    /// Find a client by id.
    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<Client>, StoreError> {
        find(store, Collection::Client, id).await
    }

    /// `true` if a client with this id exists.
    pub async fn exists(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        Ok(store.find_by_id(Collection::Client, id).await?.is_some())
    }

    /// Insert a new client, returning it with its assigned id.
    pub async fn create(store: &dyn RecordStore, input: &CreateClient) -> Result<Client, StoreError> {
        let client = Client {
            id: String::new(),
            name: input.name.clone(),
            extra: without_keys(input.extra.clone(), Client::FIELDS),
        };
        insert(store, Collection::Client, &client).await
    }

    /// Apply a flat partial update. Returns `None` if the client does not exist.
    pub async fn update(
        store: &dyn RecordStore,
        id: &str,
        input: &UpdateClient,
    ) -> Result<Option<Client>, StoreError> {
        merge_update(store, Collection::Client, id, input).await
    }
}
