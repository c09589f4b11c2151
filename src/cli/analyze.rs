use crate::{
    error,
    insight::{
        self,
        groq::GroqProvider,
        provider::{CompletionOptions, CompletionProvider},
        summary,
    },
    success,
};

use super::{fetch_tracks, print_highlights, print_summary, spinner, user_message};

pub async fn analyze(playlist: String) {
    let tracks = fetch_tracks(&playlist).await;
    success!("Fetched audio features for {} tracks", tracks.len());

    let provider = GroqProvider::from_env();
    let options = CompletionOptions::default();

    let pb = spinner(&format!(
        "Requesting commentary from {} via {}...",
        provider.model(),
        provider.name()
    ));
    let insight = match insight::generate(&tracks, &provider, &options).await {
        Ok(insight) => {
            pb.finish_and_clear();
            insight
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", user_message(&e))
        }
    };

    print_summary(&insight.summary);
    print_highlights(&summary::highlights(&tracks));

    success!("Commentary ({} via {})", provider.model(), provider.name());
    println!("\n{}", insight.commentary);
}
