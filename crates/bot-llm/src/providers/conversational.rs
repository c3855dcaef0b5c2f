use async_trait::async_trait;
use bot_core::Conversation;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::common::{ensure_success, RequestOptions};
use crate::config::HuggingFaceConfig;
use crate::provider::{ConversationalBackend, LLMError, Result};

#[derive(Serialize)]
struct ConversationalRequest<'a> {
    inputs: &'a Conversation,
    options: RequestOptions,
}

#[derive(Deserialize)]
struct ConversationalResponse {
    #[serde(default)]
    generated_text: Option<String>,
    #[serde(default)]
    conversation: Option<Conversation>,
}

/// Hosted conversational pipeline.
pub struct HuggingFaceConversational {
    client: Client,
    config: HuggingFaceConfig,
    model: String,
}

impl HuggingFaceConversational {
    pub fn new(config: HuggingFaceConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ConversationalBackend for HuggingFaceConversational {
    async fn converse(&self, conversation: Conversation) -> Result<Conversation> {
        let body = ConversationalRequest {
            inputs: &conversation,
            options: RequestOptions::default(),
        };

        log::debug!(
            "Conversational request to {} with {} prior turns",
            self.model,
            conversation.past_user_inputs.len()
        );

        let response = self
            .config
            .authorize(self.client.post(self.config.model_url(&self.model)))
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let ConversationalResponse {
            generated_text,
            conversation: returned,
        } = response.json().await?;

        let mut updated = returned.unwrap_or_else(|| {
            let mut updated = conversation.clone();
            let text = std::mem::take(&mut updated.text);
            updated.add_user_input(text);
            updated
        });

        if updated.generated_responses.len() < updated.past_user_inputs.len() {
            let reply = generated_text.ok_or(LLMError::EmptyResponse)?;
            updated.append_response(reply);
        }
        updated.text.clear();

        Ok(updated)
    }
}
