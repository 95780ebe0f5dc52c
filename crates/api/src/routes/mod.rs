pub mod brand;
pub mod client;
pub mod event;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /client                                   list, create
/// /client/{client_id}                       get, update (flat merge)
/// /client/{client_id}/brand                 list by client, create
/// /client/{client_id}/brand/{brand_id}      update (two-level merge)
///
/// /brand                                    list (capped when unfiltered)
/// /brand/{brand_id}                         get
/// /brand/{brand_id}/events                  list by brand, create
/// /brand/{brand_id}/projects                list by brand, create
///
/// /event/{event_id}                         get, update (flat merge)
///
/// /projects                                 list
/// /project/{project_id}                     get, update (flat merge)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(client::router())
        .merge(brand::router())
        .merge(event::router())
        .merge(project::router())
}
