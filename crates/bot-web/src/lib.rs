pub mod analyzer;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod templates;

pub use analyzer::{InferenceAnalyzer, SymptomAnalyzer};
pub use error::WebError;
pub use server::{app_config, run_server};
pub use state::WebState;
