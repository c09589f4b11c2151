use crate::{Res, error::InsightError};

/// Length of a bare Spotify playlist id.
const PLAYLIST_ID_LEN: usize = 22;

/// Extracts a Spotify playlist id from the supported input formats.
///
/// Accepts:
/// - a full URL (`https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M`)
/// - a URI (`spotify:playlist:37i9dQZF1DXcBWIGoYBM5M`)
/// - a bare 22-character id (`37i9dQZF1DXcBWIGoYBM5M`)
///
/// Anything else fails with [`InsightError::InvalidPlaylist`].
pub fn extract_playlist_id(input: &str) -> Res<String> {
    if let Some(pos) = input.find("playlist/") {
        let id = leading_id(&input[pos + "playlist/".len()..]);
        if !id.is_empty() {
            return Ok(id);
        }
    }

    if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        let id = leading_id(rest);
        if !id.is_empty() {
            return Ok(id);
        }
    }

    if input.len() == PLAYLIST_ID_LEN && input.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(input.to_string());
    }

    Err(InsightError::InvalidPlaylist(input.to_string()))
}

// id ends at the first non-alphanumeric character (query string, trailing slash)
fn leading_id(input: &str) -> String {
    input
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}
