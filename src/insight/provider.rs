use std::time::Duration;

use async_trait::async_trait;

use crate::Res;

/// Options for a completion request.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Trait for completion endpoints.
///
/// The completion endpoint is an injected capability: callers hold a
/// `&dyn CompletionProvider`, so the hosted backend can be swapped without
/// touching the pipeline, and tests can count and stub completion calls.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// The provider's name (e.g. "groq").
    fn name(&self) -> &str;

    /// The model this provider requests.
    fn model(&self) -> &str;

    /// Submits a prompt and returns the generated text.
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Res<String>;
}
