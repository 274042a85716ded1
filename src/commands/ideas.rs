//! Idea Commands

use gloo_net::http::Request;
use idea_view::{AdminConfig, FetchOutcome, IdeasResponse};
use web_sys::RequestCredentials;

use super::ApiError;

pub async fn list_ideas(config: &AdminConfig) -> Result<IdeasResponse, ApiError> {
    let response = Request::get(&config.ideas_url())
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(ApiError::transport)?;

    match response.status() {
        status @ (401 | 403) => return Err(ApiError::Unauthorized(status)),
        status if !response.ok() => return Err(ApiError::Status(status)),
        _ => {}
    }
    response
        .json::<IdeasResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the idea list and fold the result into a `FetchOutcome`
pub async fn fetch_outcome(config: &AdminConfig) -> FetchOutcome {
    match list_ideas(config).await {
        Ok(body) => FetchOutcome::Loaded(body),
        Err(ApiError::Unauthorized(_)) => FetchOutcome::Unauthorized,
        Err(err) => FetchOutcome::Failed(err.to_string()),
    }
}
