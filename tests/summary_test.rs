use spinsight::error::InsightError;
use spinsight::insight::{prompt, summary};
use spinsight::types::{AudioFeatures, FEATURE_NAMES, Track};

// Helper function to create audio features with fixed filler values
fn create_features(id: &str, danceability: f64, valence: f64, tempo: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        danceability,
        energy: 0.5,
        valence,
        tempo,
        acousticness: 0.3,
        instrumentalness: 0.1,
        speechiness: 0.05,
    }
}

// Helper function to create a test track
fn create_track(id: &str, name: &str, danceability: f64, valence: f64, tempo: f64) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artist: format!("{}_artist", id),
        popularity: Some(50),
        features: create_features(id, danceability, valence, tempo),
    }
}

fn sample_tracks() -> Vec<Track> {
    vec![
        create_track("t1", "First", 0.2, 0.9, 100.0),
        create_track("t2", "Second", 0.4, 0.5, 120.0),
        create_track("t3", "Third", 0.6, 0.1, 140.0),
    ]
}

#[test]
fn test_mean_of_fixed_danceability_values() {
    let tracks = sample_tracks();
    let summary = summary::summarize(&tracks).expect("non-empty input must summarize");

    let danceability = summary
        .features
        .iter()
        .find(|f| f.name == "danceability")
        .expect("danceability aggregate present");

    // [0.2, 0.4, 0.6] averages to 0.4
    assert!((danceability.mean - 0.4).abs() < 1e-9);
    assert!((danceability.min - 0.2).abs() < 1e-9);
    assert!((danceability.max - 0.6).abs() < 1e-9);
}

#[test]
fn test_mean_lies_within_min_max_for_every_feature() {
    let tracks = sample_tracks();
    let summary = summary::summarize(&tracks).unwrap();

    assert_eq!(summary.track_count, 3);
    assert_eq!(summary.features.len(), FEATURE_NAMES.len());

    for aggregate in &summary.features {
        assert!(
            aggregate.min <= aggregate.mean && aggregate.mean <= aggregate.max,
            "mean of {} out of range: {} not in [{}, {}]",
            aggregate.name,
            aggregate.mean,
            aggregate.min,
            aggregate.max
        );
    }
}

#[test]
fn test_empty_track_sequence_fails() {
    let result = summary::summarize(&[]);
    assert!(matches!(result, Err(InsightError::EmptyPlaylist)));
}

#[test]
fn test_summarize_is_idempotent() {
    let tracks = sample_tracks();

    // two consecutive runs over identical input must agree exactly
    let first = summary::summarize(&tracks).unwrap();
    let second = summary::summarize(&tracks).unwrap();

    assert_eq!(first.track_count, second.track_count);
    for (a, b) in first.features.iter().zip(second.features.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.mean, b.mean);
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
    }
}

#[test]
fn test_ranked_scales_tempo_and_sorts_descending() {
    let tracks = vec![
        create_track("t1", "First", 0.2, 0.9, 250.0),
        create_track("t2", "Second", 0.4, 0.5, 250.0),
    ];
    let summary = summary::summarize(&tracks).unwrap();
    let ranked = summary::ranked(&summary);

    // tempo mean of 250 BPM scales to exactly 1.0 and ranks first
    assert_eq!(ranked[0].0, "tempo");
    assert!((ranked[0].1 - 1.0).abs() < 1e-9);

    for pair in ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "ranked view must be descending");
    }
}

#[test]
fn test_highlights_pick_top_three_per_category() {
    let tracks = vec![
        create_track("t1", "First", 0.2, 0.9, 100.0),
        create_track("t2", "Second", 0.4, 0.5, 110.0),
        create_track("t3", "Third", 0.6, 0.1, 120.0),
        create_track("t4", "Fourth", 0.8, 0.7, 130.0),
    ];
    let highlights = summary::highlights(&tracks);

    assert_eq!(highlights.most_danceable.len(), 3);
    assert_eq!(highlights.most_danceable[0].name, "Fourth");
    assert_eq!(highlights.most_danceable[1].name, "Third");
    assert_eq!(highlights.most_danceable[2].name, "Second");

    assert_eq!(highlights.happiest.len(), 3);
    assert_eq!(highlights.happiest[0].name, "First");
    assert_eq!(highlights.happiest[1].name, "Fourth");
    assert_eq!(highlights.happiest[2].name, "Second");
}

#[test]
fn test_highlights_with_fewer_tracks_than_category_size() {
    let tracks = vec![create_track("t1", "Only", 0.5, 0.5, 100.0)];
    let highlights = summary::highlights(&tracks);

    assert_eq!(highlights.most_danceable.len(), 1);
    assert_eq!(highlights.happiest.len(), 1);
}

#[test]
fn test_prompt_renders_every_feature() {
    let tracks = sample_tracks();
    let summary = summary::summarize(&tracks).unwrap();
    let prompt = prompt::render(&summary);

    for name in FEATURE_NAMES {
        assert!(prompt.contains(name), "prompt is missing feature {}", name);
    }

    assert!(prompt.starts_with("Analyze these average Spotify audio features"));
    assert!(prompt.ends_with("Be concise, but insightful."));
}
