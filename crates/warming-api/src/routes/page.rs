//! The narrative page: previous/next controls around the visualization.

use axum::response::Html;
use axum::{Router, routing::get};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Returns the page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
