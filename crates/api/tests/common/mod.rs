#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use brandhub_db::{Document, MemoryStore, SharedStore};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use brandhub_api::config::ServerConfig;
use brandhub_api::router::build_app_router;
use brandhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no artificial delay.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        response_delay_ms: 0,
        unfiltered_list_cap: 50,
        data_file: None,
        pdf_path: PathBuf::from("public/template.pdf"),
        created_by: "user_12".to_string(),
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: SharedStore) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: SharedStore, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A store seeded with one client, one brand and a few events and projects.
///
/// ```text
/// C1 Acme        -> B1 Spark  -> events E1 Alpha, E2 alpha2, E3 Beta
///                             -> project P1 Rebrand
///                -> B2 Nova   -> event  E4 Alpha Nova
/// C2 Globex
/// ```
pub fn seeded_store() -> Arc<MemoryStore> {
    let document: Document = serde_json::from_value(serde_json::json!({
        "client": [
            {"id": "C1", "name": "Acme"},
            {"id": "C2", "name": "Globex"}
        ],
        "brand": [
            {
                "id": "B1",
                "client_id": "C1",
                "name": "Spark",
                "brand_guideline": {
                    "brand_voice": "bold",
                    "colors": ["red"],
                    "typography": [],
                    "imagery_guidelines": []
                },
                "brand_reference": {
                    "supplemental_instruction": "",
                    "reference_web_pages": [],
                    "uploaded_files": []
                }
            },
            {"id": "B2", "client_id": "C1", "name": "Nova"}
        ],
        "event": [
            {"id": "E1", "brand_id": "B1", "name": "Alpha", "created_by": "user_12", "created_at": "2024-01-01 10:00:00"},
            {"id": "E2", "brand_id": "B1", "name": "alpha2", "created_by": "user_12", "created_at": "2024-01-02 10:00:00"},
            {"id": "E3", "brand_id": "B1", "name": "Beta", "created_by": "user_12", "created_at": "2024-01-03 10:00:00"},
            {"id": "E4", "brand_id": "B2", "name": "Alpha Nova", "created_by": "user_12", "created_at": "2024-01-04 10:00:00"}
        ],
        "project": [
            {"id": "P1", "brand_id": "B1", "name": "Rebrand", "created_by": "user_12", "created_at": "2024-02-01 09:00:00"}
        ]
    }))
    .unwrap();
    Arc::new(MemoryStore::from_document(document))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Ids of the records in a list response's `data` array.
pub fn data_ids(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}
