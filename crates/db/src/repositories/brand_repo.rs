//! Repository for the `brand` collection.

use brandhub_core::pagination::Page;

use super::{find, insert, list_page, merge_update, ListQuery};
use crate::models::brand::{Brand, CreateBrand, UpdateBrand};
use crate::models::without_keys;
use crate::store::{Collection, RecordStore};
use crate::StoreError;

/// Provides list, lookup, create and update operations for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// List all brands. Without a search term only the first
    /// `query.unfiltered_cap` brands are reachable.
    pub async fn list(store: &dyn RecordStore, query: &ListQuery) -> Result<Page<Brand>, StoreError> {
        list_page(store, Collection::Brand, query.filter(), query).await
    }

    /// List the brands of one client.
    pub async fn list_by_client(
        store: &dyn RecordStore,
        client_id: &str,
        query: &ListQuery,
    ) -> Result<Page<Brand>, StoreError> {
        let filter = query.filter().with_field("client_id", client_id);
        list_page(store, Collection::Brand, filter, query).await
    }

    /// Find a brand by id.
    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<Brand>, StoreError> {
        find(store, Collection::Brand, id).await
    }

    /// `true` if a brand with this id exists.
    pub async fn exists(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        Ok(store.find_by_id(Collection::Brand, id).await?.is_some())
    }

    /// Insert a new brand under `client_id`.
    ///
    /// `brand_guideline` and `brand_reference` are always stored, with
    /// defaults filling whatever the input leaves out.
    pub async fn create(
        store: &dyn RecordStore,
        client_id: &str,
        input: &CreateBrand,
    ) -> Result<Brand, StoreError> {
        let brand = Brand {
            id: String::new(),
            client_id: client_id.to_string(),
            name: input.name.clone(),
            brand_guideline: input.guideline(),
            brand_reference: input.reference(),
            extra: without_keys(input.extra.clone(), Brand::FIELDS),
        };
        insert(store, Collection::Brand, &brand).await
    }

    /// Apply a partial update, merging the nested objects one level deep.
    ///
    /// Returns `None` if the brand does not exist.
    pub async fn update(
        store: &dyn RecordStore,
        id: &str,
        input: &UpdateBrand,
    ) -> Result<Option<Brand>, StoreError> {
        merge_update(store, Collection::Brand, id, input).await
    }
}
