use actix_web::{web, HttpResponse, Responder};
use bot_core::ChatHistory;
use bot_session::ChatBot;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: ChatHistory,
}

#[derive(Debug, Deserialize)]
pub struct HistoryRequest {
    #[serde(default)]
    pub history: ChatHistory,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: ChatHistory,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UndoResponse {
    /// The user message that was taken back, so the UI can put it back in the
    /// input box.
    pub message: String,
    pub history: ChatHistory,
}

pub async fn send(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let ChatRequest { message, history } = req.into_inner();
    log::debug!("Chat message with {} prior turns", history.len());

    let (reply, history) = state.bot.send(&message, history).await;

    HttpResponse::Ok().json(ChatResponse { reply, history })
}

pub async fn retry(state: web::Data<AppState>, req: web::Json<HistoryRequest>) -> impl Responder {
    match state.bot.retry(req.into_inner().history).await {
        Some((reply, history)) => HttpResponse::Ok().json(ChatResponse { reply, history }),
        None => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Nothing to retry"
        })),
    }
}

pub async fn undo(req: web::Json<HistoryRequest>) -> impl Responder {
    match ChatBot::undo(req.into_inner().history) {
        Some((message, history)) => HttpResponse::Ok().json(UndoResponse { message, history }),
        None => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Nothing to undo"
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_without_history_defaults_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "Hello"}"#).unwrap();

        assert_eq!(request.message, "Hello");
        assert!(request.history.is_empty());
    }

    #[test]
    fn chat_request_with_history() {
        let json = r#"{
            "message": "And you?",
            "history": [{"user": "How are you?", "bot": "Great"}]
        }"#;

        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.history.len(), 1);
        assert_eq!(request.history.turns()[0].bot, "Great");
    }
}
