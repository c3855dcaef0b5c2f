use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

use bot_core::GenerationParams;
use bot_llm::{ConversationalBackend, TextGenerationBackend};

use crate::error::SessionError;

/// How replies are produced. Chosen once when the bot starts.
#[derive(Clone)]
pub enum GenerationStrategy {
    /// Hand the whole conversation to a conversational pipeline.
    Pipeline(Arc<dyn ConversationalBackend>),
    /// Build a transcript prompt and continue it with a text generator.
    Direct {
        backend: Arc<dyn TextGenerationBackend>,
        params: GenerationParams,
        eos_token: String,
    },
}

impl GenerationStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationStrategy::Pipeline(_) => "pipeline",
            GenerationStrategy::Direct { .. } => "direct",
        }
    }
}

impl fmt::Debug for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStrategy::Pipeline(_) => f.write_str("Pipeline"),
            GenerationStrategy::Direct {
                params, eos_token, ..
            } => f
                .debug_struct("Direct")
                .field("params", params)
                .field("eos_token", eos_token)
                .finish(),
        }
    }
}

/// Which strategy the operator asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyPreference {
    /// Use the pipeline when the model supports it, otherwise go direct.
    #[default]
    Auto,
    Pipeline,
    Direct,
}

impl Display for StrategyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyPreference::Auto => write!(f, "auto"),
            StrategyPreference::Pipeline => write!(f, "pipeline"),
            StrategyPreference::Direct => write!(f, "direct"),
        }
    }
}

impl FromStr for StrategyPreference {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(StrategyPreference::Auto),
            "pipeline" => Ok(StrategyPreference::Pipeline),
            "direct" => Ok(StrategyPreference::Direct),
            other => Err(SessionError::UnknownStrategy(other.to_string())),
        }
    }
}
