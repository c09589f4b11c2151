use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Res, config,
    error::InsightError,
    types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
};

use super::provider::{CompletionOptions, CompletionProvider};

/// Completion provider for an OpenAI-compatible chat-completions endpoint.
///
/// Sends a single user message and returns the first choice's content.
/// Works against Groq's hosted endpoint, but any service speaking the same
/// chat-completions dialect can be configured through `COMPLETION_API_URL`.
pub struct GroqProvider {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GroqProvider {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        GroqProvider {
            client: Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    /// Builds a provider from the `COMPLETION_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(
            config::completion_api_url(),
            config::completion_api_key(),
            config::completion_model(),
        )
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Res<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .timeout(options.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| InsightError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::UpstreamUnavailable(format!(
                "{status}: {body}"
            )));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| InsightError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                InsightError::InvalidResponse("completion returned no choices".to_string())
            })
    }
}
