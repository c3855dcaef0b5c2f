use bot_core::messages::{
    direct_error_reply, pipeline_error_reply, EMPTY_MESSAGE_PROMPT, FALLBACK_REPLY,
};
use bot_core::{ChatHistory, Conversation, GenerationParams, Turn};
use bot_llm::{ConversationalBackend, LLMError, TextGenerationBackend};

use crate::prompt::{build_prompt, extract_reply};
use crate::strategy::GenerationStrategy;

/// Turns handed to the conversational pipeline.
pub const PIPELINE_HISTORY_LIMIT: usize = 10;
/// Turns rendered into the direct prompt.
pub const DIRECT_HISTORY_LIMIT: usize = 5;

/// Answers chat messages. Holds no conversation state of its own: every call
/// gets the history from the caller.
#[derive(Debug, Clone)]
pub struct ChatBot {
    strategy: GenerationStrategy,
}

impl ChatBot {
    pub fn new(strategy: GenerationStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &GenerationStrategy {
        &self.strategy
    }

    /// Produce a reply for `message`. Never fails: problems come back as text.
    pub async fn respond(&self, message: &str, history: &ChatHistory) -> String {
        if message.trim().is_empty() {
            return EMPTY_MESSAGE_PROMPT.to_string();
        }

        match &self.strategy {
            GenerationStrategy::Pipeline(backend) => {
                respond_with_pipeline(backend.as_ref(), message, history).await
            }
            GenerationStrategy::Direct {
                backend,
                params,
                eos_token,
            } => respond_directly(backend.as_ref(), params, eos_token, message, history).await,
        }
    }

    /// Reply to `message` and record the exchange. Blank messages are answered
    /// but not recorded.
    pub async fn send(&self, message: &str, mut history: ChatHistory) -> (String, ChatHistory) {
        let reply = self.respond(message, &history).await;
        if !message.trim().is_empty() {
            history.push(Turn::new(message, reply.clone()));
        }
        (reply, history)
    }

    /// Drop the last exchange and answer its message again.
    pub async fn retry(&self, mut history: ChatHistory) -> Option<(String, ChatHistory)> {
        let message = history.take_for_retry()?;
        log::debug!("Retrying message: {}", message);
        Some(self.send(&message, history).await)
    }

    /// Drop the last exchange, returning its user message.
    pub fn undo(mut history: ChatHistory) -> Option<(String, ChatHistory)> {
        let turn = history.undo()?;
        Some((turn.user, history))
    }
}

async fn respond_with_pipeline(
    backend: &dyn ConversationalBackend,
    message: &str,
    history: &ChatHistory,
) -> String {
    let conversation = Conversation::from_turns(history.recent(PIPELINE_HISTORY_LIMIT), message);

    let result = backend.converse(conversation).await.and_then(|updated| {
        updated
            .latest_response()
            .map(str::to_string)
            .ok_or(LLMError::EmptyResponse)
    });

    match result {
        Ok(reply) => reply,
        Err(error) => {
            log::error!("Pipeline generation failed: {}", error);
            pipeline_error_reply(error)
        }
    }
}

async fn respond_directly(
    backend: &dyn TextGenerationBackend,
    params: &GenerationParams,
    eos_token: &str,
    message: &str,
    history: &ChatHistory,
) -> String {
    let prompt = build_prompt(history.recent(DIRECT_HISTORY_LIMIT), message, eos_token);

    match backend.generate(&prompt, params).await {
        Ok(generated) => {
            let reply = extract_reply(&generated, &prompt);
            if reply.is_empty() {
                FALLBACK_REPLY.to_string()
            } else {
                reply
            }
        }
        Err(error) => {
            log::error!("Direct generation failed: {}", error);
            direct_error_reply(error)
        }
    }
}
