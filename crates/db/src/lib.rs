//! Record storage for the brandhub mock backend.
//!
//! Holds the entity models and their update DTOs, the [`RecordStore`]
//! service that the HTTP layer is handed at startup, and the per-entity
//! repositories that run list, create and update operations against it.

pub mod error;
pub mod id;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{Collection, Document, MemoryStore, RecordStore, SharedStore};
