//! Handlers for the `/brand` resource.
//!
//! Brands are created and updated under their client:
//! `/client/{client_id}/brand[/{brand_id}]`. They are read either through
//! that client or directly at `/brand[/{brand_id}]`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::pagination::Page;
use brandhub_db::models::brand::{Brand, CreateBrand, UpdateBrand};
use brandhub_db::repositories::{BrandRepo, ClientRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /brand
///
/// Without a search term only the first `UNFILTERED_LIST_CAP` brands are
/// reachable.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Page<Brand>>> {
    let query = params.to_query(Some(state.config.unfiltered_list_cap));
    let page = BrandRepo::list(state.store.as_ref(), &query).await?;
    Ok(Json(page))
}

/// GET /client/{client_id}/brand
pub async fn list_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Page<Brand>>> {
    let query = params.to_query(None);
    let page = BrandRepo::list_by_client(state.store.as_ref(), &client_id, &query).await?;
    Ok(Json(page))
}

/// GET /brand/{brand_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> AppResult<Json<DataResponse<Brand>>> {
    let brand = BrandRepo::find_by_id(state.store.as_ref(), &brand_id)
        .await?
        .ok_or_else(|| AppError::not_found("Brand", brand_id))?;
    Ok(Json(DataResponse { data: brand }))
}

/// POST /client/{client_id}/brand
///
/// The client must exist. Nested `brand_guideline` and `brand_reference`
/// objects are filled with defaults where the body leaves them out.
pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    AppJson(input): AppJson<CreateBrand>,
) -> AppResult<(StatusCode, Json<DataResponse<Brand>>)> {
    let store = state.store.as_ref();
    if !ClientRepo::exists(store, &client_id).await? {
        return Err(AppError::not_found("Client", client_id));
    }

    let brand = BrandRepo::create(store, &client_id, &input).await?;

    tracing::info!(brand_id = %brand.id, client_id = %brand.client_id, "Brand created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: brand })))
}

/// PATCH /client/{client_id}/brand/{brand_id}
///
/// Two-level merge: `brand_guideline` and `brand_reference` are merged key
/// by key, every other field is replaced. The brand is looked up by
/// `brand_id` alone; the path's `client_id` is only logged.
pub async fn update(
    State(state): State<AppState>,
    Path((client_id, brand_id)): Path<(String, String)>,
    AppJson(input): AppJson<UpdateBrand>,
) -> AppResult<Json<DataResponse<Brand>>> {
    let brand = BrandRepo::update(state.store.as_ref(), &brand_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Brand", brand_id))?;

    tracing::info!(brand_id = %brand.id, client_id = %client_id, "Brand updated");

    Ok(Json(DataResponse { data: brand }))
}
