//! Project entity model and DTOs.

use brandhub_core::filter::Listable;
use brandhub_core::merge::{merge_extra, overlay, Extra, Merge};
use brandhub_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// A record from the `project` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    #[serde(default)]
    pub brand_id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_by: String,
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    #[serde(default)]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Project {
    pub const FIELDS: &'static [&'static str] =
        &["id", "brand_id", "name", "created_by", "created_at"];
}

/// DTO for creating a project. `brand_id` comes from the URL path and the
/// creation metadata is assigned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProject {
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProject {
    pub brand_id: Option<RecordId>,
    pub name: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Merge for Project {
    type Patch = UpdateProject;

    fn merge(&self, patch: &UpdateProject) -> Self {
        Self {
            id: self.id.clone(),
            brand_id: overlay(&self.brand_id, patch.brand_id.as_ref()),
            name: overlay(&self.name, patch.name.as_ref()),
            created_by: overlay(&self.created_by, patch.created_by.as_ref()),
            created_at: overlay(&self.created_at, patch.created_at.as_ref()),
            extra: merge_extra(&self.extra, &patch.extra),
        }
    }
}

impl Listable for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "brand_id" => Some(&self.brand_id),
            "name" => Some(&self.name),
            "created_by" => Some(&self.created_by),
            "created_at" => Some(&self.created_at),
            other => self.extra.get(other).and_then(|v| v.as_str()),
        }
    }
}
