//! Entity models and their create/update DTOs.
//!
//! Stored records are schema-free JSON: each model keeps the fields the API
//! promises as typed members and carries any other top-level field in a
//! flattened `extra` map.

pub mod brand;
pub mod client;
pub mod event;
pub mod project;

use brandhub_core::merge::Extra;

/// Drop `keys` from client-supplied extra fields so they cannot shadow
/// server-assigned typed fields.
pub(crate) fn without_keys(mut extra: Extra, keys: &[&str]) -> Extra {
    extra.retain(|k, _| !keys.contains(&k.as_str()));
    extra
}
