use crate::{error, insight::summary, success};

use super::{fetch_tracks, print_highlights, print_summary, user_message};

pub async fn features(playlist: String) {
    let tracks = fetch_tracks(&playlist).await;
    success!("Fetched audio features for {} tracks", tracks.len());

    let summary = match summary::summarize(&tracks) {
        Ok(summary) => summary,
        Err(e) => error!("{}", user_message(&e)),
    };

    print_summary(&summary);
    print_highlights(&summary::highlights(&tracks));
}
