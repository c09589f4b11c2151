use std::cmp::Ordering;

use crate::{
    Res,
    error::InsightError,
    types::{FEATURE_NAMES, FeatureAggregate, FeatureSummary, Highlights, Track, TrackHighlight},
};

/// Tempo upper bound in BPM used to scale tempo onto the 0-1 feature range.
const TEMPO_SCALE: f64 = 250.0;

/// Number of tracks listed per highlight category.
const HIGHLIGHT_COUNT: usize = 3;

/// Aggregates per-track audio features into per-feature statistics.
///
/// Computes mean, min, and max for every feature in `FEATURE_NAMES` order.
/// An empty input fails with [`InsightError::EmptyPlaylist`] so that no
/// malformed (empty) aggregate ever reaches the completion endpoint.
pub fn summarize(tracks: &[Track]) -> Res<FeatureSummary> {
    if tracks.is_empty() {
        return Err(InsightError::EmptyPlaylist);
    }

    let mut features = Vec::with_capacity(FEATURE_NAMES.len());
    for (index, name) in FEATURE_NAMES.iter().copied().enumerate() {
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for track in tracks {
            let (_, value) = track.features.values()[index];
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        features.push(FeatureAggregate {
            name,
            mean: sum / tracks.len() as f64,
            min,
            max,
        });
    }

    Ok(FeatureSummary {
        track_count: tracks.len(),
        features,
    })
}

/// Feature means sorted descending, with tempo scaled onto 0-1.
///
/// Tempo is reported in BPM by the catalog; dividing by 250 brings it onto
/// the same scale as the other features so the ranking is meaningful. This
/// is the view the prompt template renders.
pub fn ranked(summary: &FeatureSummary) -> Vec<(&'static str, f64)> {
    let mut ranked: Vec<(&'static str, f64)> = summary
        .features
        .iter()
        .map(|f| {
            let mean = if f.name == "tempo" {
                f.mean / TEMPO_SCALE
            } else {
                f.mean
            };
            (f.name, mean)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked
}

/// Picks the standout tracks of the playlist.
///
/// Returns the top three tracks by danceability and by valence for display
/// next to the summary table.
pub fn highlights(tracks: &[Track]) -> Highlights {
    Highlights {
        most_danceable: top_by(tracks, |t| t.features.danceability),
        happiest: top_by(tracks, |t| t.features.valence),
    }
}

fn top_by<F>(tracks: &[Track], value: F) -> Vec<TrackHighlight>
where
    F: Fn(&Track) -> f64,
{
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by(|a, b| value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal));

    sorted
        .into_iter()
        .take(HIGHLIGHT_COUNT)
        .map(|t| TrackHighlight {
            name: t.name.clone(),
            artist: t.artist.clone(),
            value: value(t),
        })
        .collect()
}
