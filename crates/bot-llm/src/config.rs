use std::fmt;

use reqwest::RequestBuilder;

pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_HUB_BASE: &str = "https://huggingface.co";
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Where the Hugging Face services live and how to authenticate against them.
#[derive(Clone)]
pub struct HuggingFaceConfig {
    pub api_base: String,
    pub hub_base: String,
    pub token: Option<String>,
}

impl HuggingFaceConfig {
    pub fn new(token: Option<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            hub_base: DEFAULT_HUB_BASE.to_string(),
            token: token.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Log once at startup when requests will go out unauthenticated.
    pub fn warn_if_anonymous(&self) {
        if !self.has_token() {
            log::warn!(
                "{} is not set; requests will be sent without credentials",
                TOKEN_ENV_VAR
            );
        }
    }

    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    pub fn with_hub_base(mut self, url: impl Into<String>) -> Self {
        self.hub_base = url.into();
        self
    }

    /// Inference endpoint for `model`.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.api_base.trim_end_matches('/'), model)
    }

    /// Hub metadata endpoint for `model`.
    pub fn model_info_url(&self, model: &str) -> String {
        format!("{}/api/models/{}", self.hub_base.trim_end_matches('/'), model)
    }

    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_base", &self.api_base)
            .field("hub_base", &self.hub_base)
            .field("token", &self.token.as_ref().map(|_| "****"))
            .finish()
    }
}
