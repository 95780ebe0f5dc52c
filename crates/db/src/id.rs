//! Record id generation.

use brandhub_core::types::RecordId;
use uuid::Uuid;

/// Issues unique, time-ordered record ids.
///
/// Ids are UUIDv7 strings: they sort by creation instant and stay unique
/// when several records are created within the same millisecond.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the next id.
    pub fn next_id(&self) -> RecordId {
        Uuid::now_v7().to_string()
    }
}
