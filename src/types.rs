use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The fixed set of audio features analyzed per track, in display order.
pub const FEATURE_NAMES: [&str; 7] = [
    "danceability",
    "energy",
    "valence",
    "tempo",
    "acousticness",
    "instrumentalness",
    "speechiness",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub valence: f64,
    pub tempo: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub speechiness: f64,
}

impl AudioFeatures {
    /// Feature values paired with their names, in `FEATURE_NAMES` order.
    pub fn values(&self) -> [(&'static str, f64); 7] {
        [
            ("danceability", self.danceability),
            ("energy", self.energy),
            ("valence", self.valence),
            ("tempo", self.tempo),
            ("acousticness", self.acousticness),
            ("instrumentalness", self.instrumentalness),
            ("speechiness", self.speechiness),
        ]
    }
}

/// A playlist track joined with its audio features. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub popularity: Option<u32>,
    pub features: AudioFeatures,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureAggregate {
    pub name: &'static str,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub track_count: usize,
    pub features: Vec<FeatureAggregate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackHighlight {
    pub name: String,
    pub artist: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlights {
    pub most_danceable: Vec<TrackHighlight>,
    pub happiest: Vec<TrackHighlight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistInsight {
    pub summary: FeatureSummary,
    pub commentary: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub mean: String,
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}
