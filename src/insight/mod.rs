//! # Insight Generation Module
//!
//! This module turns a sequence of tracks into a piece of commentary. It
//! implements the second half of the pipeline: aggregate the per-track
//! audio features into summary statistics, render them into a fixed
//! natural-language prompt, and submit that prompt to a completion
//! endpoint.
//!
//! ## Core Modules
//!
//! - [`summary`] - Per-feature mean/min/max aggregation, the ranked view
//!   used for prompt rendering, and per-track highlights
//! - [`prompt`] - The fixed prompt template
//! - [`provider`] - The [`provider::CompletionProvider`] trait; the
//!   completion endpoint is an injected capability, not a hardcoded
//!   dependency, so tests substitute stubs through the same seam
//! - [`groq`] - Concrete provider for an OpenAI-compatible
//!   chat-completions endpoint
//!
//! ## Pipeline
//!
//! ```text
//! Vec<Track> → FeatureSummary → prompt string → CompletionProvider → Commentary
//! ```
//!
//! Each step is a single linear pass with no retained state across calls.
//! An empty track sequence fails with `EmptyPlaylist` before any network
//! request is made.

pub mod groq;
pub mod prompt;
pub mod provider;
pub mod summary;

use crate::{
    Res,
    types::{PlaylistInsight, Track},
};
use provider::{CompletionOptions, CompletionProvider};

/// Runs the insight pipeline over a sequence of tracks.
///
/// Aggregates the tracks into a [`crate::types::FeatureSummary`], renders
/// the fixed prompt, and requests commentary from the given provider.
///
/// # Arguments
///
/// * `tracks` - Tracks with audio features, as returned by the fetcher
/// * `provider` - Completion endpoint to request commentary from
/// * `options` - Fixed completion parameters (temperature, timeout)
///
/// # Errors
///
/// - [`crate::error::InsightError::EmptyPlaylist`] - no tracks to analyze;
///   the completion endpoint is not contacted in this case
/// - [`crate::error::InsightError::UpstreamUnavailable`] - the completion
///   endpoint is unreachable or answered with a non-success status
/// - [`crate::error::InsightError::InvalidResponse`] - the completion
///   response had no usable content
pub async fn generate(
    tracks: &[Track],
    provider: &dyn CompletionProvider,
    options: &CompletionOptions,
) -> Res<PlaylistInsight> {
    let summary = summary::summarize(tracks)?;
    let prompt = prompt::render(&summary);
    let commentary = provider.complete(&prompt, options).await?;

    Ok(PlaylistInsight {
        summary,
        commentary,
    })
}
