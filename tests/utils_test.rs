use spinsight::error::InsightError;
use spinsight::utils::extract_playlist_id;

#[test]
fn test_extract_from_full_url() {
    let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
        .expect("full URL should be accepted");
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_from_url_with_query() {
    // share links carry a tracking query string
    let id = extract_playlist_id(
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123def456",
    )
    .expect("URL with query string should be accepted");
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_from_uri() {
    let id = extract_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M")
        .expect("URI format should be accepted");
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_bare_id() {
    let id = extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M").expect("bare id should be accepted");
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_reject_garbage() {
    let result = extract_playlist_id("not a playlist at all");
    assert!(matches!(result, Err(InsightError::InvalidPlaylist(_))));
}

#[test]
fn test_reject_wrong_length_bare_id() {
    // bare ids must be exactly 22 alphanumeric characters
    let result = extract_playlist_id("37i9dQZF1");
    assert!(matches!(result, Err(InsightError::InvalidPlaylist(_))));
}

#[test]
fn test_reject_empty_input() {
    let result = extract_playlist_id("");
    assert!(matches!(result, Err(InsightError::InvalidPlaylist(_))));
}
