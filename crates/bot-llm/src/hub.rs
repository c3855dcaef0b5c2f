use reqwest::Client;
use serde::Deserialize;

use crate::config::HuggingFaceConfig;
use crate::provider::{LLMError, Result};
use crate::providers::common::ensure_success;

pub const CONVERSATIONAL_PIPELINE: &str = "conversational";

/// The parts of the Hub model card we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
}

pub struct HubClient {
    client: Client,
    config: HuggingFaceConfig,
}

impl HubClient {
    pub fn new(config: HuggingFaceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn model_info(&self, model: &str) -> Result<ModelInfo> {
        let response = self
            .config
            .authorize(self.client.get(self.config.model_info_url(model)))
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// Fetch the model card and check that it advertises `pipeline`.
    pub async fn require_pipeline(&self, model: &str, pipeline: &str) -> Result<ModelInfo> {
        let info = self.model_info(model).await?;
        match info.pipeline_tag.as_deref() {
            Some(tag) if tag == pipeline => Ok(info),
            other => Err(LLMError::UnsupportedPipeline {
                model: model.to_string(),
                expected: pipeline.to_string(),
                found: other.unwrap_or("none").to_string(),
            }),
        }
    }
}
