pub mod chatbot;
pub mod error;
pub mod init;
pub mod prompt;
pub mod strategy;

pub use chatbot::{ChatBot, DIRECT_HISTORY_LIMIT, PIPELINE_HISTORY_LIMIT};
pub use error::SessionError;
pub use init::{ChatBotConfig, DEFAULT_CHAT_MODEL};
pub use prompt::{build_prompt, extract_reply, DEFAULT_EOS_TOKEN};
pub use strategy::{GenerationStrategy, StrategyPreference};
