use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{
    error::InsightError,
    insight::{self, groq::GroqProvider, provider::CompletionOptions},
    spotify,
};

pub async fn analyze(
    Query(params): Query<HashMap<String, String>>,
    Extension(provider): Extension<Arc<GroqProvider>>,
) -> Response {
    let Some(playlist) = params.get("playlist") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "missing_playlist",
                "message": "playlist query parameter is required"
            })),
        )
            .into_response();
    };

    let tracks = match spotify::fetch_playlist_tracks(playlist).await {
        Ok(tracks) => tracks,
        Err(e) => return error_response(&e),
    };

    match insight::generate(&tracks, provider.as_ref(), &CompletionOptions::default()).await {
        Ok(insight) => (
            StatusCode::OK,
            Json(json!({
                "playlist": playlist,
                "tracks": tracks.len(),
                "summary": insight.summary,
                "commentary": insight.commentary,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

// one status code and kind string per tagged variant
fn error_response(err: &InsightError) -> Response {
    let (status, kind) = match err {
        InsightError::InvalidPlaylist(_) => (StatusCode::BAD_REQUEST, "invalid_playlist"),
        InsightError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        InsightError::EmptyPlaylist => (StatusCode::UNPROCESSABLE_ENTITY, "empty_playlist"),
        InsightError::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
        InsightError::Authentication(_) => (StatusCode::BAD_GATEWAY, "authentication"),
        InsightError::UpstreamUnavailable(_) => (StatusCode::BAD_GATEWAY, "upstream_unavailable"),
        InsightError::InvalidResponse(_) => (StatusCode::BAD_GATEWAY, "invalid_response"),
        InsightError::Http(_) => (StatusCode::BAD_GATEWAY, "http"),
    };

    (
        status,
        Json(json!({
            "error": kind,
            "message": err.to_string(),
        })),
    )
        .into_response()
}
