//! Shared response envelope types for API handlers.
//!
//! Single-record responses use a `{ "data": ... }` envelope. List responses
//! serialize a [`Page`](brandhub_core::pagination::Page) directly as
//! `{ "limit", "last_id", "data" }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: event }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
