//! # CLI Module
//!
//! This module provides the command-line interface layer for Spinsight. It
//! implements the user-facing commands and coordinates between the Spotify
//! client, the insight pipeline, and terminal output.
//!
//! ## Command Categories
//!
//! - [`analyze`] - Full pipeline: fetch a playlist's audio features,
//!   aggregate them, and request commentary from the completion endpoint
//! - [`features`] - Fetch and aggregate only; no completion request
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Spotify Integration Layer (fetch)
//!     ↓
//! Insight Layer (aggregate, prompt, complete)
//!     ↓
//! Terminal Output (tables, highlights, commentary)
//! ```
//!
//! ## Error Presentation
//!
//! Every failure kind carries its own user-facing message: the CLI
//! branches on the tagged [`crate::error::InsightError`] variants and
//! appends actionable advice (which variable to check, whether to retry)
//! before terminating through the `error!` macro. No command retries or
//! recovers; a failure aborts the run.
//!
//! ## Progress Feedback
//!
//! Network phases show a spinner; fetch and analysis results are reported
//! through the crate's colored status macros.

mod analyze;
mod features;

pub use analyze::analyze;
pub use features::features;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    error::InsightError,
    info, spotify,
    types::{FeatureSummary, FeatureTableRow, Highlights, Track},
};

/// Per-kind user-facing failure text.
///
/// Keeps the tagged error message and appends what the user can do about
/// that particular failure kind.
pub(crate) fn user_message(err: &InsightError) -> String {
    match err {
        InsightError::Authentication(_) => format!(
            "{err}\n    Check SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET."
        ),
        InsightError::NotFound(_) => format!("{err}\n    Check the playlist URL or id."),
        InsightError::InvalidPlaylist(_) => format!(
            "{err}\n    Expected a playlist URL, a spotify:playlist: URI, or a 22-character id."
        ),
        InsightError::RateLimited { .. } => format!("{err}\n    Try again later."),
        InsightError::UpstreamUnavailable(_) => {
            format!("{err}\n    Check COMPLETION_API_URL and COMPLETION_API_KEY.")
        }
        InsightError::EmptyPlaylist
        | InsightError::InvalidResponse(_)
        | InsightError::Http(_) => err.to_string(),
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub(crate) async fn fetch_tracks(playlist: &str) -> Vec<Track> {
    let pb = spinner("Fetching playlist audio features...");
    match spotify::fetch_playlist_tracks(playlist).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", user_message(&e))
        }
    }
}

pub(crate) fn print_summary(summary: &FeatureSummary) {
    let rows: Vec<FeatureTableRow> = summary
        .features
        .iter()
        .map(|f| FeatureTableRow {
            feature: f.name.to_string(),
            mean: format!("{:.3}", f.mean),
            min: format!("{:.3}", f.min),
            max: format!("{:.3}", f.max),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

pub(crate) fn print_highlights(highlights: &Highlights) {
    info!("Most danceable tracks:");
    for track in &highlights.most_danceable {
        println!("    - {} by {} ({:.2})", track.name, track.artist, track.value);
    }

    info!("Happiest sounding tracks:");
    for track in &highlights.happiest {
        println!("    - {} by {} ({:.2})", track.name, track.artist, track.value);
    }
}
