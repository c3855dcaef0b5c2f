use async_trait::async_trait;
use bot_core::GenerationParams;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::common::{ensure_success, RequestOptions};
use crate::config::HuggingFaceConfig;
use crate::provider::{LLMError, Result, TextGenerationBackend};

#[derive(Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
    options: RequestOptions,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

// The hosted API answers with a list; a self-hosted generation server answers
// with a single object.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl TextGenerationResponse {
    fn into_text(self) -> Option<String> {
        match self {
            TextGenerationResponse::Batch(items) => {
                items.into_iter().next().map(|item| item.generated_text)
            }
            TextGenerationResponse::Single(item) => Some(item.generated_text),
        }
    }
}

/// Text-generation endpoint, hosted or local.
pub struct HuggingFaceTextGeneration {
    client: Client,
    config: HuggingFaceConfig,
    endpoint: String,
}

impl HuggingFaceTextGeneration {
    pub fn new(config: HuggingFaceConfig, model: &str) -> Self {
        let endpoint = config.model_url(model);
        Self {
            client: Client::new(),
            config,
            endpoint,
        }
    }

    /// Send generation requests to `url` instead of the hosted model endpoint.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerationBackend for HuggingFaceTextGeneration {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        let body = TextGenerationRequest {
            inputs: prompt,
            parameters: params,
            options: RequestOptions::default(),
        };

        log::debug!(
            "Text generation request to {} ({} prompt chars)",
            self.endpoint,
            prompt.chars().count()
        );

        let response = self
            .config
            .authorize(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let parsed: TextGenerationResponse = response.json().await?;

        parsed.into_text().ok_or(LLMError::EmptyResponse)
    }
}
