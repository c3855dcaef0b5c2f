use actix_web::{http::header::ContentType, web, HttpResponse};
use bot_core::messages::EMPTY_SYMPTOMS_PROMPT;
use serde::Deserialize;
use tera::Context;

use crate::error::Result;
use crate::state::WebState;
use crate::templates::{INDEX_TEMPLATE, RESULT_TEMPLATE};

#[derive(Debug, Deserialize)]
pub struct SymptomForm {
    pub symptoms: Option<String>,
}

pub async fn index(state: web::Data<WebState>) -> Result<HttpResponse> {
    let html = state.templates.render(INDEX_TEMPLATE, &Context::new())?;
    Ok(html_response(html))
}

pub async fn check(
    state: web::Data<WebState>,
    form: Option<web::Form<SymptomForm>>,
) -> Result<HttpResponse> {
    // A missing or non-form body counts as an absent field.
    let symptoms = form.and_then(|form| form.into_inner().symptoms);
    let result = match symptoms {
        Some(symptoms) if !symptoms.trim().is_empty() => {
            log::info!("Checking symptoms ({} chars)", symptoms.chars().count());
            state.analyzer.analyze(&symptoms).await
        }
        _ => EMPTY_SYMPTOMS_PROMPT.to_string(),
    };

    let mut context = Context::new();
    context.insert("result", &result);
    let html = state.templates.render(RESULT_TEMPLATE, &context)?;
    Ok(html_response(html))
}

fn html_response(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}
