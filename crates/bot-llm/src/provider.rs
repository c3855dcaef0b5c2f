use async_trait::async_trait;
use bot_core::{Conversation, GenerationParams};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API Error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Model {model} does not serve the {expected} pipeline (found: {found})")]
    UnsupportedPipeline {
        model: String,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// A generator that works on whole conversations.
#[async_trait]
pub trait ConversationalBackend: Send + Sync {
    /// Run one turn. The returned conversation has the pending `text` moved into
    /// `past_user_inputs` and the new reply appended to `generated_responses`.
    async fn converse(&self, conversation: Conversation) -> Result<Conversation>;
}

/// A generator that continues a raw prompt.
#[async_trait]
pub trait TextGenerationBackend: Send + Sync {
    /// Returns the generated text. With `return_full_text` set this starts with
    /// the prompt.
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}
