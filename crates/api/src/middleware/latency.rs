//! Simulated network latency.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Sleep for `config.response_delay_ms` before handing the request on.
///
/// Only the current request is suspended; other requests keep running.
pub async fn simulate_latency(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let delay = state.config.response_delay();
    if !delay.is_zero() {
        tracing::trace!(delay_ms = state.config.response_delay_ms, "Delaying request");
        tokio::time::sleep(delay).await;
    }
    next.run(request).await
}
