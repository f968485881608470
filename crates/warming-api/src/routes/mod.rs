//! Route modules.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod health;
pub mod narrative;
pub mod page;

/// Returns the full application router (without middleware layers).
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(page::router())
        .nest("/api/v1/narrative", narrative::router())
}

/// Returns the served application: the router with HTTP tracing, bound to
/// `state`. The page and the API share an origin, so no CORS layer is added.
pub fn app(state: AppState) -> Router {
    router().layer(TraceLayer::new_for_http()).with_state(state)
}
