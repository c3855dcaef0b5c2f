use async_trait::async_trait;
use bot_llm::InferenceClient;

/// Turns a free-text symptom description into a result to show the user.
#[async_trait]
pub trait SymptomAnalyzer: Send + Sync {
    async fn analyze(&self, symptoms: &str) -> String;
}

/// Sends the description to a hosted model and shows the raw JSON answer, or
/// the error string when the call fails.
pub struct InferenceAnalyzer {
    client: InferenceClient,
}

impl InferenceAnalyzer {
    pub fn new(client: InferenceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SymptomAnalyzer for InferenceAnalyzer {
    async fn analyze(&self, symptoms: &str) -> String {
        log::debug!("Analyzing symptoms with {}", self.client.endpoint());
        self.client.query_text(symptoms).await
    }
}
