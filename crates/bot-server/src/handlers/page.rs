use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use bot_core::messages::EXAMPLE_PROMPTS;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn examples() -> impl Responder {
    HttpResponse::Ok().json(EXAMPLE_PROMPTS)
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "strategy": state.bot.strategy().name(),
    }))
}
