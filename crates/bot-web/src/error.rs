use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

pub type Result<T, E = WebError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body("Something went wrong while rendering the page.")
    }
}
