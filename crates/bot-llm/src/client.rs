use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::HuggingFaceConfig;
use crate::provider::Result;
use crate::providers::common::ensure_success;

pub const DEFAULT_INFERENCE_MODEL: &str = "distilbert-base-uncased";

#[derive(Debug, Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
}

/// Thin caller for a single hosted model: `{"inputs": text}` in, raw JSON out.
pub struct InferenceClient {
    client: Client,
    config: HuggingFaceConfig,
    model: String,
}

impl InferenceClient {
    pub fn new(config: HuggingFaceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            model: DEFAULT_INFERENCE_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn endpoint(&self) -> String {
        self.config.model_url(&self.model)
    }

    pub async fn query(&self, inputs: &str) -> Result<Value> {
        let response = self
            .config
            .authorize(self.client.post(self.endpoint()))
            .json(&InferencePayload { inputs })
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(response.json::<Value>().await?)
    }

    /// Like [`query`](Self::query) but always yields something printable: the
    /// JSON response, or a description of what went wrong.
    pub async fn query_text(&self, inputs: &str) -> String {
        match self.query(inputs).await {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
            Err(error) => {
                log::error!("Inference query against {} failed: {}", self.model, error);
                error.to_string()
            }
        }
    }
}
