//! Writes made through the API survive a restart when a data file is set.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use brandhub_db::MemoryStore;
use common::{body_json, get, patch_json, post_json};
use serde_json::json;

#[tokio::test]
async fn created_and_patched_records_are_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let store = Arc::new(MemoryStore::open(&path).await.unwrap());
    let response = post_json(
        common::build_test_app(store.clone()),
        "/client",
        json!({"name": "Acme"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_str().unwrap().to_string();

    let response = patch_json(
        common::build_test_app(store),
        &format!("/client/{id}"),
        json!({"tier": "gold"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let reopened = Arc::new(MemoryStore::open(&path).await.unwrap());
    let json = body_json(get(common::build_test_app(reopened), &format!("/client/{id}")).await).await;
    assert_eq!(json["data"], json!({"id": id, "name": "Acme", "tier": "gold"}));
}
