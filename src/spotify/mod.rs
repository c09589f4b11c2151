//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! insight pipeline: authentication, playlist resolution, and audio-feature
//! retrieval. It is the primary integration layer between Spinsight and
//! Spotify's services, handling HTTP communication, the token exchange,
//! and the mapping of API failures onto the crate's tagged error variants.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Server)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Playlist Tracks (paginated lookup)
//!     └── Audio Features (batched lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The module implements the OAuth 2.0 client-credentials flow:
//!
//! 1. **Token Request**: POST to the accounts token endpoint with an HTTP
//!    Basic authorization header derived from the client id and secret
//! 2. **Single-Run Token**: the token lives for the duration of one
//!    analysis run; nothing is persisted and every run re-authenticates
//!
//! There is no user-interactive authorization: the flow only reaches
//! public catalog data (playlists and audio features), so no scopes or
//! callback handling are required.
//!
//! ## Error Handling Philosophy
//!
//! Upstream failures are classified once, in [`status_error`], and
//! propagated as tagged variants:
//!
//! - **401/403** → [`InsightError::Authentication`]
//! - **404** → [`InsightError::NotFound`]
//! - **429** → [`InsightError::RateLimited`] carrying the `Retry-After`
//!   header value; the request is never retried internally
//!
//! Other non-success statuses and transport errors surface through
//! `reqwest`'s error type. No retry or backoff policy exists by design.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - playlist tracks with pagination
//! - `GET /audio-features` - batch audio features (up to 100 ids)
//!
//! ## Usage Pattern
//!
//! ```rust
//! let tracks = spotify::fetch_playlist_tracks(
//!     "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
//! ).await?;
//! println!("{} tracks with audio features", tracks.len());
//! ```

pub mod auth;
pub mod features;
pub mod playlist;

use std::collections::HashMap;

use reqwest::StatusCode;

use crate::{
    Res,
    error::InsightError,
    types::{AudioFeatures, Track},
    utils,
};

/// Maps a Spotify API response status onto a tagged error variant.
///
/// Returns `None` for statuses that are not classified here; callers fall
/// back to `error_for_status` for those. `resource` names the entity the
/// request was about (e.g. the playlist id) and is carried by the
/// `NotFound` variant.
///
/// # Classification
///
/// - `401 Unauthorized` / `403 Forbidden` → [`InsightError::Authentication`]
/// - `404 Not Found` → [`InsightError::NotFound`]
/// - `429 Too Many Requests` → [`InsightError::RateLimited`]
pub fn status_error(
    status: StatusCode,
    resource: &str,
    retry_after: Option<u64>,
) -> Option<InsightError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(InsightError::Authentication(
            format!("catalog API rejected the request ({status})"),
        )),
        StatusCode::NOT_FOUND => Some(InsightError::NotFound(resource.to_string())),
        StatusCode::TOO_MANY_REQUESTS => Some(InsightError::RateLimited { retry_after }),
        _ => None,
    }
}

/// Reads the `Retry-After` header of a throttled response, in seconds.
pub fn retry_after(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

/// Fetches a playlist and returns its tracks joined with audio features.
///
/// This is the complete fetcher contract: resolve the playlist id, obtain
/// a client-credentials token, page through the playlist tracks, batch-load
/// the audio features, and join both by track id preserving playlist order.
///
/// # Arguments
///
/// * `playlist` - Playlist URL, `spotify:playlist:` URI, or bare id
///
/// # Returns
///
/// Returns an ordered `Vec<Track>`. Items without a track id (local
/// tracks) or without audio features are skipped, mirroring what the
/// catalog returns for them.
///
/// # Errors
///
/// - [`InsightError::InvalidPlaylist`] - unrecognized playlist input
/// - [`InsightError::Authentication`] - rejected credentials or token
/// - [`InsightError::NotFound`] - playlist id does not resolve
/// - [`InsightError::RateLimited`] - upstream throttling, not retried
/// - [`InsightError::Http`] - transport or other HTTP failures
pub async fn fetch_playlist_tracks(playlist: &str) -> Res<Vec<Track>> {
    let playlist_id = utils::extract_playlist_id(playlist)?;
    let token = auth::request_token().await?;

    let items = playlist::get_playlist_tracks(&token.access_token, &playlist_id).await?;

    let track_ids: Vec<String> = items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .filter_map(|track| track.id.clone())
        .collect();

    let features = features::get_audio_features(&token.access_token, &track_ids).await?;
    let features_by_id: HashMap<String, AudioFeatures> =
        features.into_iter().map(|f| (f.id.clone(), f)).collect();

    let tracks = items
        .into_iter()
        .filter_map(|item| item.track)
        .filter_map(|track| {
            let id = track.id?;
            let features = features_by_id.get(&id)?.clone();
            Some(Track {
                id,
                name: track.name,
                artist: track
                    .artists
                    .iter()
                    .map(|a| a.name.clone())
                    .collect::<Vec<_>>()
                    .join(", "),
                popularity: track.popularity,
                features,
            })
        })
        .collect();

    Ok(tracks)
}
