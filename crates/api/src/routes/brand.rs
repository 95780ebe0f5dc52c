//! Route definitions for the `/brand` resource and the events and projects
//! nested under a brand.

use axum::routing::get;
use axum::Router;

use crate::handlers::{brand, event, project};
use crate::state::AppState;

/// ```text
/// GET    /brand                          -> brand::list
/// GET    /brand/{brand_id}               -> brand::get_by_id
/// GET    /brand/{brand_id}/events        -> event::list_by_brand
/// POST   /brand/{brand_id}/events        -> event::create
/// GET    /brand/{brand_id}/projects      -> project::list_by_brand
/// POST   /brand/{brand_id}/projects      -> project::create
/// ```
///
/// `/brand/{brand_id}/event` is accepted as an alias of `.../events` for
/// clients built against the singular path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brand", get(brand::list))
        .route("/brand/{brand_id}", get(brand::get_by_id))
        .route(
            "/brand/{brand_id}/events",
            get(event::list_by_brand).post(event::create),
        )
        .route(
            "/brand/{brand_id}/event",
            get(event::list_by_brand).post(event::create),
        )
        .route(
            "/brand/{brand_id}/projects",
            get(project::list_by_brand).post(project::create),
        )
}
