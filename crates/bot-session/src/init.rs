use std::sync::Arc;

use bot_core::GenerationParams;
use bot_llm::{
    HubClient, HuggingFaceConfig, HuggingFaceConversational, HuggingFaceTextGeneration,
    CONVERSATIONAL_PIPELINE,
};

use crate::chatbot::ChatBot;
use crate::prompt::DEFAULT_EOS_TOKEN;
use crate::strategy::{GenerationStrategy, StrategyPreference};

pub const DEFAULT_CHAT_MODEL: &str = "microsoft/DialoGPT-medium";

#[derive(Debug, Clone)]
pub struct ChatBotConfig {
    pub hf: HuggingFaceConfig,
    pub model: String,
    pub preference: StrategyPreference,
    /// Local text-generation server used by the direct strategy instead of the
    /// hosted model endpoint.
    pub generation_url: Option<String>,
    pub eos_token: String,
    pub params: GenerationParams,
}

impl ChatBotConfig {
    pub fn new(hf: HuggingFaceConfig) -> Self {
        Self {
            hf,
            model: DEFAULT_CHAT_MODEL.to_string(),
            preference: StrategyPreference::default(),
            generation_url: None,
            eos_token: DEFAULT_EOS_TOKEN.to_string(),
            params: GenerationParams::default(),
        }
    }
}

impl ChatBot {
    /// Pick the generation strategy and build the bot.
    ///
    /// With [`StrategyPreference::Auto`] the Hub is asked whether the model
    /// serves the conversational pipeline; any failure falls back to direct
    /// prompt construction.
    pub async fn initialize(config: ChatBotConfig) -> Self {
        log::info!("Loading chatbot model {}...", config.model);

        let strategy = match config.preference {
            StrategyPreference::Pipeline => pipeline_strategy(&config),
            StrategyPreference::Direct => direct_strategy(&config),
            StrategyPreference::Auto => {
                let hub = HubClient::new(config.hf.clone());
                match hub
                    .require_pipeline(&config.model, CONVERSATIONAL_PIPELINE)
                    .await
                {
                    Ok(_) => pipeline_strategy(&config),
                    Err(error) => {
                        log::warn!("Pipeline method failed: {}", error);
                        log::info!("Trying alternative method...");
                        direct_strategy(&config)
                    }
                }
            }
        };

        match &strategy {
            GenerationStrategy::Pipeline(_) => log::info!("Using conversational pipeline"),
            GenerationStrategy::Direct { .. } => log::info!("Using direct prompt generation"),
        }
        log::info!("Chatbot loaded successfully!");

        ChatBot::new(strategy)
    }
}

fn pipeline_strategy(config: &ChatBotConfig) -> GenerationStrategy {
    GenerationStrategy::Pipeline(Arc::new(HuggingFaceConversational::new(
        config.hf.clone(),
        config.model.clone(),
    )))
}

fn direct_strategy(config: &ChatBotConfig) -> GenerationStrategy {
    let mut backend = HuggingFaceTextGeneration::new(config.hf.clone(), &config.model);
    if let Some(url) = &config.generation_url {
        backend = backend.with_endpoint(url.clone());
    }
    log::debug!("Direct generation endpoint: {}", backend.endpoint());

    GenerationStrategy::Direct {
        backend: Arc::new(backend),
        params: config.params.clone(),
        eos_token: config.eos_token.clone(),
    }
}
