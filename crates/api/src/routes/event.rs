use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// ```text
/// GET    /event/{event_id}   -> get_by_id
/// PATCH  /event/{event_id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/event/{event_id}",
        get(event::get_by_id).patch(event::update),
    )
}
