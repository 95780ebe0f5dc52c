//! Error-to-response mapping and storage failure behaviour.

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use brandhub_api::error::AppError;
use brandhub_core::error::CoreError;
use brandhub_db::{Collection, RecordStore, StoreError};
use common::{body_json, get, patch_json, post_json};
use serde_json::{json, Value};

/// A store whose reads succeed (and see nothing) and whose writes fail.
struct FailingStore;

fn write_failure() -> StoreError {
    StoreError::Io {
        path: PathBuf::from("/unwritable/db.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn all(&self, _collection: Collection) -> Result<Vec<Value>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _collection: Collection, _id: &str) -> Result<Option<Value>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, _collection: Collection, _record: Value) -> Result<Value, StoreError> {
        Err(write_failure())
    }

    async fn replace(
        &self,
        _collection: Collection,
        _id: &str,
        _record: Value,
    ) -> Result<Option<Value>, StoreError> {
        Err(write_failure())
    }

    async fn count(&self, _collection: Collection) -> Result<usize, StoreError> {
        Err(write_failure())
    }
}

// ---------------------------------------------------------------------------
// AppError -> response
// ---------------------------------------------------------------------------

async fn render(error: AppError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn not_found_names_entity_and_id() {
    let (status, body) = render(AppError::not_found("Event", "E42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Event with id E42 not found"}));
}

#[tokio::test]
async fn validation_is_400_with_message() {
    let (status, body) = render(AppError::Core(CoreError::Validation("name must be a string".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name must be a string");
}

#[tokio::test]
async fn bad_request_is_400() {
    let (status, _) = render(AppError::BadRequest("bad query".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_errors_hide_details() {
    let (status, body) = render(AppError::Store(write_failure())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "An internal error occurred"}));
}

// ---------------------------------------------------------------------------
// Through the router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_insert_returns_500() {
    let app = common::build_test_app(Arc::new(FailingStore));
    let response = post_json(app, "/client", json!({"name": "Initech"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "An internal error occurred");
}

#[tokio::test]
async fn reads_from_empty_store_still_succeed() {
    let app = common::build_test_app(Arc::new(FailingStore));
    let json = body_json(get(app, "/brand").await).await;
    assert_eq!(json, json!({"limit": 10, "last_id": null, "data": []}));
}

#[tokio::test]
async fn mistyped_body_field_is_400() {
    let app = common::build_test_app(common::seeded_store());
    let response = post_json(app, "/client", json!({"name": ["not", "a", "string"]})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn non_json_body_is_400() {
    let app = common::build_test_app(common::seeded_store());
    let response = common::send(app, axum::http::Method::PATCH, "/client/C1", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_record_on_patch_is_404_not_500() {
    let app = common::build_test_app(Arc::new(FailingStore));
    let response = patch_json(app, "/event/E1", json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
