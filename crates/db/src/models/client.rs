//! Client entity model and DTOs.

use brandhub_core::filter::Listable;
use brandhub_core::merge::{merge_extra, overlay, Extra, Merge};
use brandhub_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// A record from the `client` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Client {
    /// Typed top-level fields; never stored in `extra`.
    pub const FIELDS: &'static [&'static str] = &["id", "name"];
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateClient {
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateClient {
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Merge for Client {
    type Patch = UpdateClient;

    fn merge(&self, patch: &UpdateClient) -> Self {
        Self {
            id: self.id.clone(),
            name: overlay(&self.name, patch.name.as_ref()),
            extra: merge_extra(&self.extra, &patch.extra),
        }
    }
}

impl Listable for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            other => self.extra.get(other).and_then(|v| v.as_str()),
        }
    }
}
