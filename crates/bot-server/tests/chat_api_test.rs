use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use bot_core::{messages::EXAMPLE_PROMPTS, ChatHistory, Conversation, Turn};
use bot_llm::{ConversationalBackend, LLMError};
use bot_server::handlers::chat::{ChatResponse, UndoResponse};
use bot_server::{app_config, AppState};
use bot_session::{ChatBot, GenerationStrategy};

/// Answers with the reply count so repeated calls are distinguishable.
#[derive(Default)]
struct CountingPipeline {
    seen: Mutex<Vec<Conversation>>,
}

#[async_trait]
impl ConversationalBackend for CountingPipeline {
    async fn converse(&self, mut conversation: Conversation) -> bot_llm::Result<Conversation> {
        let mut seen = self.seen.lock().unwrap();
        seen.push(conversation.clone());

        let reply = format!("reply #{} to {}", seen.len(), conversation.text);
        let text = std::mem::take(&mut conversation.text);
        conversation.add_user_input(text);
        conversation.append_response(reply);
        Ok(conversation)
    }
}

struct FailingPipeline;

#[async_trait]
impl ConversationalBackend for FailingPipeline {
    async fn converse(&self, _conversation: Conversation) -> bot_llm::Result<Conversation> {
        Err(LLMError::Api {
            status: 503,
            body: "Model is currently loading".to_string(),
        })
    }
}

fn state_with(backend: Arc<dyn ConversationalBackend>) -> web::Data<AppState> {
    let bot = ChatBot::new(GenerationStrategy::Pipeline(backend));
    web::Data::new(AppState::new(bot))
}

#[actix_web::test]
async fn test_chat_appends_turn() {
    let pipeline = Arc::new(CountingPipeline::default());
    let app = test::init_service(
        App::new()
            .app_data(state_with(pipeline.clone()))
            .configure(app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({
            "message": "And you?",
            "history": [{"user": "Hi", "bot": "Hello!"}]
        }))
        .to_request();
    let resp: ChatResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.reply, "reply #1 to And you?");
    assert_eq!(resp.history.len(), 2);
    assert_eq!(resp.history.turns()[1], Turn::new("And you?", "reply #1 to And you?"));

    let seen = pipeline.seen.lock().unwrap();
    assert_eq!(seen[0].past_user_inputs, vec!["Hi"]);
    assert_eq!(seen[0].generated_responses, vec!["Hello!"]);
}

#[actix_web::test]
async fn test_chat_blank_message_leaves_history_alone() {
    let pipeline = Arc::new(CountingPipeline::default());
    let app = test::init_service(
        App::new()
            .app_data(state_with(pipeline.clone()))
            .configure(app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({"message": "   "}))
        .to_request();
    let resp: ChatResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.reply, "Please enter a message!");
    assert!(resp.history.is_empty());
    assert!(pipeline.seen.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_chat_backend_error_becomes_reply() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(Arc::new(FailingPipeline)))
            .configure(app_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({"message": "Hello"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ChatResponse = test::read_body_json(resp).await;
    assert_eq!(
        body.reply,
        "Error with pipeline method: API Error: 503 - Model is currently loading"
    );
    assert_eq!(body.history.len(), 1);
}

#[actix_web::test]
async fn test_retry_regenerates_last_turn() {
    let pipeline = Arc::new(CountingPipeline::default());
    let app = test::init_service(
        App::new()
            .app_data(state_with(pipeline.clone()))
            .configure(app_config),
    )
    .await;

    let history = ChatHistory::from(vec![
        Turn::new("Hi", "Hello!"),
        Turn::new("Tell me a joke", "No."),
    ]);
    let req = test::TestRequest::post()
        .uri("/api/retry")
        .set_json(serde_json::json!({ "history": history }))
        .to_request();
    let resp: ChatResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.reply, "reply #1 to Tell me a joke");
    assert_eq!(resp.history.len(), 2);
    assert_eq!(resp.history.turns()[0], Turn::new("Hi", "Hello!"));

    let seen = pipeline.seen.lock().unwrap();
    assert_eq!(seen[0].past_user_inputs, vec!["Hi"]);
}

#[actix_web::test]
async fn test_retry_and_undo_reject_empty_history() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(Arc::new(CountingPipeline::default())))
            .configure(app_config),
    )
    .await;

    for uri in ["/api/retry", "/api/undo"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(serde_json::json!({ "history": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[actix_web::test]
async fn test_undo_returns_last_message() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(Arc::new(CountingPipeline::default())))
            .configure(app_config),
    )
    .await;

    let history = ChatHistory::from(vec![
        Turn::new("Hi", "Hello!"),
        Turn::new("What's your favorite food?", "Pizza"),
    ]);
    let req = test::TestRequest::post()
        .uri("/api/undo")
        .set_json(serde_json::json!({ "history": history }))
        .to_request();
    let resp: UndoResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.message, "What's your favorite food?");
    assert_eq!(resp.history, ChatHistory::from(vec![Turn::new("Hi", "Hello!")]));
}

#[actix_web::test]
async fn test_examples_health_and_index() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(Arc::new(CountingPipeline::default())))
            .configure(app_config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/examples").to_request();
    let examples: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(examples, EXAMPLE_PROMPTS);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["strategy"], "pipeline");

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("AI Chatbot"));
    // Example buttons appear after load; busy() looks buttons up per call.
    assert!(html.contains(
        "function busy(flag) {\n      document.querySelectorAll(\"button\")"
    ));
}
