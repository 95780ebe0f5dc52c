use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /projects                 -> list
/// GET    /project/{project_id}     -> get_by_id
/// PATCH  /project/{project_id}     -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route(
            "/project/{project_id}",
            get(project::get_by_id).patch(project::update),
        )
}
