//! Handlers for the `/client` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::pagination::Page;
use brandhub_db::models::client::{Client, CreateClient, UpdateClient};
use brandhub_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /client
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Page<Client>>> {
    let query = params.to_query(None);
    let page = ClientRepo::list(state.store.as_ref(), &query).await?;
    Ok(Json(page))
}

/// GET /client/{client_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::find_by_id(state.store.as_ref(), &client_id)
        .await?
        .ok_or_else(|| AppError::not_found("Client", client_id))?;
    Ok(Json(DataResponse { data: client }))
}

/// POST /client
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClient>,
) -> AppResult<(StatusCode, Json<DataResponse<Client>>)> {
    let client = ClientRepo::create(state.store.as_ref(), &input).await?;

    tracing::info!(client_id = %client.id, "Client created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}

/// PATCH /client/{client_id}
pub async fn update(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    AppJson(input): AppJson<UpdateClient>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::update(state.store.as_ref(), &client_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Client", client_id))?;

    tracing::info!(client_id = %client.id, "Client updated");

    Ok(Json(DataResponse { data: client }))
}
