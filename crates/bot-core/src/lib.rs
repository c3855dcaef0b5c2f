pub mod generation;
pub mod logging;
pub mod messages;
pub mod types;

pub use generation::GenerationParams;
pub use logging::init_logging;
pub use types::{ChatHistory, Conversation, Turn};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
