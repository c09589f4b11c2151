use reqwest::Client;

use crate::{
    Res, config,
    spotify::{retry_after, status_error},
    types::{AudioFeatures, AudioFeaturesResponse},
};

/// Batch size for the audio-features endpoint (API maximum).
const BATCH_SIZE: usize = 100;

/// Retrieves audio features for a list of tracks in batches.
///
/// Fetches the numeric audio descriptors (danceability, energy, valence,
/// tempo, ...) for up to 100 tracks per request, joining the ids with
/// commas the way the batch endpoint expects. Tracks the catalog has no
/// features for come back as `null` and are dropped from the result.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `track_ids` - Track ids to fetch features for, any length
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<AudioFeatures>)` - Features for every track the catalog knows
/// - `Err(InsightError)` - Classified API error or transport failure
///
/// # Error Handling
///
/// Responses pass through [`status_error`]: a rejected token fails with
/// `Authentication` and upstream throttling with `RateLimited` carrying
/// the `Retry-After` header value. Throttling is propagated, not retried.
///
/// # Example
///
/// ```
/// let features = get_audio_features(&token, &track_ids).await?;
/// println!("features for {} of {} tracks", features.len(), track_ids.len());
/// ```
pub async fn get_audio_features(token: &str, track_ids: &[String]) -> Res<Vec<AudioFeatures>> {
    let client = Client::new();
    let mut all_features: Vec<AudioFeatures> = Vec::with_capacity(track_ids.len());

    for chunk in track_ids.chunks(BATCH_SIZE) {
        let ids = chunk.join(",");
        let api_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = &config::spotify_apiurl(),
            ids = ids
        );

        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if let Some(err) = status_error(response.status(), &ids, retry_after(&response)) {
            return Err(err);
        }
        let response = response.error_for_status()?;

        let batch = response.json::<AudioFeaturesResponse>().await?;
        // tracks without features come back as null entries
        all_features.extend(batch.audio_features.into_iter().flatten());
    }

    Ok(all_features)
}
