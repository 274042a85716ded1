//! Auth Commands
//!
//! Login and logout against the admin API.

use gloo_net::http::Request;
use idea_view::{classify_login, parse_login_body, AdminConfig, LoginOutcome, LoginRequest};
use web_sys::RequestCredentials;

use super::ApiError;

/// Submit credentials.
///
/// `Ok` whenever the server answered, with the outcome classified;
/// `Err` only when the request never completed.
pub async fn login(config: &AdminConfig, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
    let request = Request::post(&config.login_url())
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest { username, password })
        .map_err(ApiError::transport)?;
    let response = request.send().await.map_err(ApiError::transport)?;

    // An unreadable body is treated like `{}`
    let body = response.text().await.unwrap_or_default();
    Ok(classify_login(response.ok(), &parse_login_body(&body)))
}

/// Best-effort API logout
pub async fn logout(config: &AdminConfig) -> Result<(), ApiError> {
    let response = Request::post(&config.logout_api_url())
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
