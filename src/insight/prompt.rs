use crate::types::FeatureSummary;

use super::summary;

/// Renders the fixed prompt sent to the completion endpoint.
///
/// The feature lines come from the ranked view (means sorted descending,
/// tempo scaled onto 0-1), one `name value` pair per line.
pub fn render(summary: &FeatureSummary) -> String {
    let mut lines = String::new();
    for (name, value) in summary::ranked(summary) {
        lines.push_str(&format!("{name:<16} {value:.3}\n"));
    }

    format!(
        "Analyze these average Spotify audio features from a trending playlist:\n\n\
         {lines}\n\
         Write a short paragraph with insight into what kind of music is trending. \
         Be concise, but insightful."
    )
}
