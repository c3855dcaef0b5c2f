pub mod client;
pub mod config;
pub mod hub;
pub mod provider;
pub mod providers;

pub use client::{InferenceClient, DEFAULT_INFERENCE_MODEL};
pub use config::{HuggingFaceConfig, DEFAULT_API_BASE, DEFAULT_HUB_BASE, TOKEN_ENV_VAR};
pub use hub::{HubClient, ModelInfo, CONVERSATIONAL_PIPELINE};
pub use provider::{ConversationalBackend, LLMError, Result, TextGenerationBackend};
pub use providers::{HuggingFaceConversational, HuggingFaceTextGeneration};
