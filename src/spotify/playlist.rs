use reqwest::Client;

use crate::{
    Res, config,
    spotify::{retry_after, status_error},
    types::{PlaylistItem, PlaylistTracksResponse},
};

/// Page size for the playlist-tracks endpoint (API maximum).
const PAGE_LIMIT: u32 = 100;

/// Retrieves all items of a playlist from the Spotify Web API.
///
/// Fetches the playlist's tracks page by page, following the `next` link
/// returned by the API until the playlist is exhausted. The result keeps
/// the playlist order; a single invocation performs one complete,
/// non-restartable fetch.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Bare playlist id (already extracted from URL/URI)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<PlaylistItem>)` - All playlist items in playlist order
/// - `Err(InsightError)` - Classified API error or transport failure
///
/// # Pagination
///
/// The first request asks for `limit=100` (the API maximum); subsequent
/// pages are fetched through the absolute `next` URL the API returns, so
/// no offset bookkeeping happens on our side.
///
/// # Error Handling
///
/// Each page response passes through [`status_error`]: an unknown playlist
/// id fails with `NotFound`, a rejected token with `Authentication`, and
/// upstream throttling with `RateLimited` carrying the `Retry-After`
/// header. Throttling is propagated to the caller, never retried here.
///
/// # Example
///
/// ```
/// let items = get_playlist_tracks(&token, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("playlist has {} items", items.len());
/// ```
pub async fn get_playlist_tracks(token: &str, playlist_id: &str) -> Res<Vec<PlaylistItem>> {
    let client = Client::new();
    let mut items: Vec<PlaylistItem> = Vec::new();

    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = PAGE_LIMIT
    ));

    while let Some(url) = next_url {
        let response = client.get(&url).bearer_auth(token).send().await?;

        if let Some(err) = status_error(response.status(), playlist_id, retry_after(&response)) {
            return Err(err);
        }
        let response = response.error_for_status()?;

        let page = response.json::<PlaylistTracksResponse>().await?;
        items.extend(page.items);
        next_url = page.next;
    }

    Ok(items)
}
