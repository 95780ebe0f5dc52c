//! Route definitions for the `/client` resource, including the brands
//! nested under a client.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{brand, client};
use crate::state::AppState;

/// ```text
/// GET    /client                                -> client::list
/// POST   /client                                -> client::create
/// GET    /client/{client_id}                    -> client::get_by_id
/// PATCH  /client/{client_id}                    -> client::update
/// GET    /client/{client_id}/brand              -> brand::list_by_client
/// POST   /client/{client_id}/brand              -> brand::create
/// PATCH  /client/{client_id}/brand/{brand_id}   -> brand::update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/client", get(client::list).post(client::create))
        .route(
            "/client/{client_id}",
            get(client::get_by_id).patch(client::update),
        )
        .route(
            "/client/{client_id}/brand",
            get(brand::list_by_client).post(brand::create),
        )
        .route("/client/{client_id}/brand/{brand_id}", patch(brand::update))
}
