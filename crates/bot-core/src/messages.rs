//! Fixed user-facing strings.

pub const EMPTY_MESSAGE_PROMPT: &str = "Please enter a message!";
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that. Could you try rephrasing?";
pub const EMPTY_SYMPTOMS_PROMPT: &str = "Please enter your symptoms.";

/// Reply shown when the conversational pipeline fails.
pub fn pipeline_error_reply(error: impl std::fmt::Display) -> String {
    format!("Error with pipeline method: {}", error)
}

/// Reply shown when direct generation fails.
pub fn direct_error_reply(error: impl std::fmt::Display) -> String {
    format!("I encountered an error: {}. Please try again!", error)
}

pub const EXAMPLE_PROMPTS: [&str; 8] = [
    "Hello! How are you today?",
    "What's your favorite topic to discuss?",
    "Can you tell me a funny joke?",
    "Recommend a good book to read",
    "What kind of music do you like?",
    "Tell me something interesting about space",
    "How does artificial intelligence work?",
    "What's your favorite food?",
];
