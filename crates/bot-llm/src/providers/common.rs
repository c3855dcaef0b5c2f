use reqwest::Response;
use serde::Serialize;

use crate::provider::{LLMError, Result};

/// Pass 2xx responses through; turn anything else into `LLMError::Api`.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    log::warn!("Inference API returned {}: {}", status, body);
    Err(LLMError::Api {
        status: status.as_u16(),
        body,
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestOptions {
    pub wait_for_model: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
        }
    }
}
