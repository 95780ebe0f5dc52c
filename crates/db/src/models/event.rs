//! Event entity model and DTOs.
//!
//! Events belong to a brand through `brand_id`. Updates use the flat merge
//! rule: every field present in the patch replaces the stored one.

use brandhub_core::filter::Listable;
use brandhub_core::merge::{merge_extra, overlay, Extra, Merge};
use brandhub_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// A record from the `event` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
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

impl Event {
    pub const FIELDS: &'static [&'static str] =
        &["id", "brand_id", "name", "created_by", "created_at"];
}

/// DTO for creating an event. `brand_id` comes from the URL path and the
/// creation metadata is assigned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEvent {
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateEvent {
    pub brand_id: Option<RecordId>,
    pub name: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Merge for Event {
    type Patch = UpdateEvent;

    fn merge(&self, patch: &UpdateEvent) -> Self {
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

impl Listable for Event {
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn launch() -> Event {
        serde_json::from_value(json!({
            "id": "E1",
            "brand_id": "B1",
            "name": "Launch",
            "created_by": "user_12",
            "created_at": "2024-05-01 09:30:00",
            "location": "Berlin"
        }))
        .unwrap()
    }

    #[test]
    fn empty_patch_is_identity() {
        let event = launch();
        assert_eq!(event.merge(&UpdateEvent::default()), event);
    }

    #[test]
    fn flat_merge_overwrites_present_fields_only() {
        let patch: UpdateEvent =
            serde_json::from_value(json!({"name": "Relaunch", "location": "Paris"})).unwrap();
        let next = launch().merge(&patch);
        assert_eq!(next.name, "Relaunch");
        assert_eq!(next.extra["location"], "Paris");
        assert_eq!(next.brand_id, "B1");
        assert_eq!(next.created_at, "2024-05-01 09:30:00");
    }

    #[test]
    fn nested_extra_values_are_replaced_wholesale() {
        let mut event = launch();
        event
            .extra
            .insert("details".into(), json!({"budget": 10, "owner": "ann"}));
        let patch: UpdateEvent =
            serde_json::from_value(json!({"details": {"budget": 20}})).unwrap();
        let next = event.merge(&patch);
        assert_eq!(next.extra["details"], json!({"budget": 20}));
    }

    #[test]
    fn creation_metadata_may_be_overwritten() {
        let patch: UpdateEvent =
            serde_json::from_value(json!({"created_by": "user_99"})).unwrap();
        assert_eq!(launch().merge(&patch).created_by, "user_99");
    }

    #[test]
    fn brand_id_is_filterable() {
        let event = launch();
        assert_eq!(event.field("brand_id"), Some("B1"));
        assert_eq!(event.field("location"), Some("Berlin"));
        assert_eq!(event.field("missing"), None);
    }
}
