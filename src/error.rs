use thiserror::Error;

/// Failure kinds for a playlist analysis run.
///
/// Each upstream or local failure maps to a distinct variant so that the
/// presentation layer (CLI messages, HTTP status codes) can branch on the
/// kind instead of parsing error strings. None of these are retried or
/// recovered internally; a failure at any step aborts the whole run.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The catalog service rejected our client credentials.
    #[error("authentication with the catalog service failed: {0}")]
    Authentication(String),

    /// The playlist identifier did not resolve to a playlist.
    #[error("playlist {0} not found")]
    NotFound(String),

    /// The catalog service throttled us. Propagated, never retried.
    #[error("rate limited by the catalog service{}", .retry_after.map_or(String::new(), |s| format!(" (retry after {s}s)")))]
    RateLimited { retry_after: Option<u64> },

    /// The input is not a playlist URL, URI, or bare id.
    #[error("invalid playlist URL or id: {0}")]
    InvalidPlaylist(String),

    /// The playlist resolved but carries no analyzable tracks.
    #[error("playlist has no tracks to analyze")]
    EmptyPlaylist,

    /// The completion endpoint is unreachable or returned a non-success status.
    #[error("completion endpoint unavailable: {0}")]
    UpstreamUnavailable(String),

    /// An upstream response did not have the expected shape.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
