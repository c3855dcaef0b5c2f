use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_NEW_TOKENS: u32 = 100;
pub const DEFAULT_NUM_BEAMS: u32 = 3;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_NO_REPEAT_NGRAM_SIZE: u32 = 2;
pub const DEFAULT_MAX_INPUT_TOKENS: u32 = 512;

/// Decoding settings attached to every direct generation call.
///
/// Serializes to the `parameters` object of a text-generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub num_beams: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub no_repeat_ngram_size: u32,
    /// Prompt tokens kept when the transcript is too long.
    #[serde(rename = "truncate")]
    pub max_input_tokens: u32,
    /// Ask for prompt + continuation so the caller can cut the prompt off.
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            num_beams: DEFAULT_NUM_BEAMS,
            temperature: DEFAULT_TEMPERATURE,
            do_sample: true,
            no_repeat_ngram_size: DEFAULT_NO_REPEAT_NGRAM_SIZE,
            max_input_tokens: DEFAULT_MAX_INPUT_TOKENS,
            return_full_text: true,
        }
    }
}
