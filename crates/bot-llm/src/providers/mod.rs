pub(crate) mod common;
pub mod conversational;
pub mod text_generation;

pub use conversational::HuggingFaceConversational;
pub use text_generation::HuggingFaceTextGeneration;
