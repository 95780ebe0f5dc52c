//! Repository for the `project` collection.

use brandhub_core::pagination::Page;
use brandhub_core::types::now_timestamp;

use super::{find, insert, list_page, merge_update, ListQuery};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::without_keys;
use crate::store::{Collection, RecordStore};
use crate::StoreError;

/// Provides list, lookup, create and update operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects across every brand.
    pub async fn list(store: &dyn RecordStore, query: &ListQuery) -> Result<Page<Project>, StoreError> {
        list_page(store, Collection::Project, query.filter(), query).await
    }

    /// List the projects of one brand.
    pub async fn list_by_brand(
        store: &dyn RecordStore,
        brand_id: &str,
        query: &ListQuery,
    ) -> Result<Page<Project>, StoreError> {
        let filter = query.filter().with_field("brand_id", brand_id);
        list_page(store, Collection::Project, filter, query).await
    }

    /// Find a project by id.
    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<Project>, StoreError> {
        find(store, Collection::Project, id).await
    }

    /// Insert a new project under `brand_id`.
    pub async fn create(
        store: &dyn RecordStore,
        brand_id: &str,
        created_by: &str,
        input: &CreateProject,
    ) -> Result<Project, StoreError> {
        let project = Project {
            id: String::new(),
            brand_id: brand_id.to_string(),
            name: input.name.clone(),
            created_by: created_by.to_string(),
            created_at: now_timestamp(),
            extra: without_keys(input.extra.clone(), Project::FIELDS),
        };
        insert(store, Collection::Project, &project).await
    }

    /// Apply a flat partial update. Returns `None` if the project does not exist.
    pub async fn update(
        store: &dyn RecordStore,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        merge_update(store, Collection::Project, id, input).await
    }
}
