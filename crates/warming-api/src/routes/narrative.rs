//! Routes for the scene navigation context.

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, instrument};
use uuid::Uuid;
use warming_core::error::DomainError;
use warming_narrative::application::query_handlers::{NarrativeView, SceneSummary};
use warming_narrative::application::{command_handlers, query_handlers};
use warming_narrative::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn get_narrative(State(state): State<AppState>) -> Result<Json<NarrativeView>, ApiError> {
    let narrative = state.lock()?;
    Ok(Json(query_handlers::get_narrative(&*narrative)))
}

/// GET /scenes
#[instrument(skip(state))]
async fn list_scenes(State(state): State<AppState>) -> Result<Json<Vec<SceneSummary>>, ApiError> {
    let narrative = state.lock()?;
    Ok(Json(query_handlers::list_scenes(&*narrative)))
}

/// POST /advance
#[instrument(skip(state))]
async fn advance(State(state): State<AppState>) -> Result<Json<NarrativeView>, ApiError> {
    let command = commands::Advance {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling advance command");

    let mut narrative = state.lock()?;
    Ok(Json(command_handlers::handle_advance(&command, &mut *narrative)))
}

/// POST /retreat
#[instrument(skip(state))]
async fn retreat(State(state): State<AppState>) -> Result<Json<NarrativeView>, ApiError> {
    let command = commands::Retreat {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling retreat command");

    let mut narrative = state.lock()?;
    Ok(Json(command_handlers::handle_retreat(&command, &mut *narrative)))
}

/// GET /scene.svg
#[instrument(skip(state, headers))]
async fn scene_svg(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let narrative = state.lock()?;
    let surface = narrative.surface();
    let (Some(document), Some(fingerprint)) = (surface.document(), surface.fingerprint()) else {
        return Err(DomainError::Infrastructure("no scene has been rendered".into()).into());
    };

    let etag = HeaderValue::from_str(&format!("\"{fingerprint}\""))
        .map_err(|e| DomainError::Infrastructure(format!("invalid etag: {e}")))?;

    if if_none_match_hits(&headers, fingerprint) {
        return Ok((StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, HeaderValue::from_static("image/svg+xml")),
            (ETAG, etag),
        ],
        document.to_owned(),
    )
        .into_response())
}

/// Weak comparison of `If-None-Match` against the current fingerprint:
/// `*` or any listed tag, with or without a `W/` prefix, counts as a hit.
fn if_none_match_hits(headers: &HeaderMap, fingerprint: &str) -> bool {
    headers
        .get_all(IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|tag| {
            tag == "*"
                || tag
                    .strip_prefix("W/")
                    .unwrap_or(tag)
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    == Some(fingerprint)
        })
}

/// Returns the router for the narrative context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_narrative))
        .route("/scenes", get(list_scenes))
        .route("/advance", post(advance))
        .route("/retreat", post(retreat))
        .route("/scene.svg", get(scene_svg))
}
