use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use spinsight::Res;
use spinsight::error::InsightError;
use spinsight::insight::{
    self,
    provider::{CompletionOptions, CompletionProvider},
};
use spinsight::spotify::status_error;
use spinsight::types::{AudioFeatures, Track};

// Stub provider that records every completion request it receives
struct StubProvider {
    response: String,
    fail: bool,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    fn returning(response: &str) -> Self {
        StubProvider {
            response: response.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    fn failing() -> Self {
        StubProvider {
            response: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, prompt: &str, _options: &CompletionOptions) -> Res<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        if self.fail {
            return Err(InsightError::UpstreamUnavailable("stub offline".to_string()));
        }

        Ok(self.response.clone())
    }
}

// Helper function to create a test track with uniform feature keys
fn create_track(id: &str, danceability: f64) -> Track {
    Track {
        id: id.to_string(),
        name: format!("{}_name", id),
        artist: format!("{}_artist", id),
        popularity: Some(40),
        features: AudioFeatures {
            id: id.to_string(),
            danceability,
            energy: 0.6,
            valence: 0.4,
            tempo: 118.0,
            acousticness: 0.2,
            instrumentalness: 0.0,
            speechiness: 0.08,
        },
    }
}

#[tokio::test]
async fn test_commentary_passes_through_verbatim() {
    let tracks = vec![
        create_track("t1", 0.2),
        create_track("t2", 0.4),
        create_track("t3", 0.6),
    ];
    let provider = StubProvider::returning("Trend: upbeat");

    let insight = insight::generate(&tracks, &provider, &CompletionOptions::default())
        .await
        .expect("generation with a working provider must succeed");

    assert_eq!(insight.commentary, "Trend: upbeat");
    assert_eq!(provider.call_count(), 1);
    assert_eq!(insight.summary.track_count, 3);
}

#[tokio::test]
async fn test_empty_playlist_never_reaches_the_provider() {
    let provider = StubProvider::returning("should never be seen");

    let result = insight::generate(&[], &provider, &CompletionOptions::default()).await;

    assert!(matches!(result, Err(InsightError::EmptyPlaylist)));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_provider_receives_rendered_feature_prompt() {
    let tracks = vec![create_track("t1", 0.5)];
    let provider = StubProvider::returning("ok");

    insight::generate(&tracks, &provider, &CompletionOptions::default())
        .await
        .unwrap();

    let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("average Spotify audio features"));
    assert!(prompt.contains("danceability"));
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let tracks = vec![create_track("t1", 0.5)];
    let provider = StubProvider::failing();

    let result = insight::generate(&tracks, &provider, &CompletionOptions::default()).await;

    assert!(matches!(result, Err(InsightError::UpstreamUnavailable(_))));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_two_runs_over_identical_input_agree() {
    let tracks = vec![create_track("t1", 0.3), create_track("t2", 0.7)];
    let provider = StubProvider::returning("same every time");
    let options = CompletionOptions::default();

    let first = insight::generate(&tracks, &provider, &options).await.unwrap();
    let second = insight::generate(&tracks, &provider, &options).await.unwrap();

    assert_eq!(first.commentary, second.commentary);
    for (a, b) in first
        .summary
        .features
        .iter()
        .zip(second.summary.features.iter())
    {
        assert_eq!(a.mean, b.mean);
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
    }
}

#[test]
fn test_status_classification() {
    // rejected token
    let err = status_error(StatusCode::UNAUTHORIZED, "abc", None).unwrap();
    assert!(matches!(err, InsightError::Authentication(_)));

    let err = status_error(StatusCode::FORBIDDEN, "abc", None).unwrap();
    assert!(matches!(err, InsightError::Authentication(_)));

    // unknown playlist id
    let err = status_error(StatusCode::NOT_FOUND, "abc", None).unwrap();
    assert!(matches!(err, InsightError::NotFound(id) if id == "abc"));

    // throttled, with and without a Retry-After value
    let err = status_error(StatusCode::TOO_MANY_REQUESTS, "abc", Some(30)).unwrap();
    assert!(matches!(
        err,
        InsightError::RateLimited {
            retry_after: Some(30)
        }
    ));

    let err = status_error(StatusCode::TOO_MANY_REQUESTS, "abc", None).unwrap();
    assert!(matches!(err, InsightError::RateLimited { retry_after: None }));

    // success and unclassified statuses fall through
    assert!(status_error(StatusCode::OK, "abc", None).is_none());
    assert!(status_error(StatusCode::BAD_GATEWAY, "abc", None).is_none());
}
