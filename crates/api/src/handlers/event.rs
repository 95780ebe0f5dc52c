//! Handlers for the `/event` resource.
//!
//! Events are listed and created under their brand
//! (`/brand/{brand_id}/events`) and read or updated by id
//! (`/event/{event_id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::pagination::Page;
use brandhub_db::models::event::{CreateEvent, Event, UpdateEvent};
use brandhub_db::repositories::{BrandRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /brand/{brand_id}/events
pub async fn list_by_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Page<Event>>> {
    let query = params.to_query(None);
    let page = EventRepo::list_by_brand(state.store.as_ref(), &brand_id, &query).await?;
    Ok(Json(page))
}

/// GET /event/{event_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<DataResponse<Event>>> {
    let event = EventRepo::find_by_id(state.store.as_ref(), &event_id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", event_id))?;
    Ok(Json(DataResponse { data: event }))
}

/// POST /brand/{brand_id}/events
///
/// The brand must exist. The server assigns `id`, `brand_id`, `created_by`
/// and `created_at`, overriding any values in the body.
pub async fn create(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    AppJson(input): AppJson<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    let store = state.store.as_ref();
    if !BrandRepo::exists(store, &brand_id).await? {
        return Err(AppError::not_found("Brand", brand_id));
    }

    let event = EventRepo::create(store, &brand_id, &state.config.created_by, &input).await?;

    tracing::info!(event_id = %event.id, brand_id = %event.brand_id, "Event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PATCH /event/{event_id}
pub async fn update(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(input): AppJson<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    let event = EventRepo::update(state.store.as_ref(), &event_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Event", event_id))?;

    tracing::info!(event_id = %event.id, "Event updated");

    Ok(Json(DataResponse { data: event }))
}
