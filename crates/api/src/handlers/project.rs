//! Handlers for the `/project` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::pagination::Page;
use brandhub_db::models::project::{CreateProject, Project, UpdateProject};
use brandhub_db::repositories::{BrandRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /projects
///
/// Lists projects across all brands. Unlike `/brand`, never capped.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Page<Project>>> {
    let query = params.to_query(None);
    let page = ProjectRepo::list(state.store.as_ref(), &query).await?;
    Ok(Json(page))
}

/// GET /brand/{brand_id}/projects
pub async fn list_by_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Page<Project>>> {
    let query = params.to_query(None);
    let page = ProjectRepo::list_by_brand(state.store.as_ref(), &brand_id, &query).await?;
    Ok(Json(page))
}

/// GET /project/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(state.store.as_ref(), &project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", project_id))?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /brand/{brand_id}/projects
///
/// Same parent check and server-assigned fields as event creation.
pub async fn create(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let store = state.store.as_ref();
    if !BrandRepo::exists(store, &brand_id).await? {
        return Err(AppError::not_found("Brand", brand_id));
    }

    let project = ProjectRepo::create(store, &brand_id, &state.config.created_by, &input).await?;

    tracing::info!(project_id = %project.id, brand_id = %project.brand_id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PATCH /project/{project_id}
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::update(state.store.as_ref(), &project_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", project_id))?;

    tracing::info!(project_id = %project.id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}
