//! Admin API Wrappers
//!
//! Frontend bindings to the backend admin endpoints, organized by domain.
//! Every request carries the session cookie.

mod auth;
mod ideas;

use thiserror::Error;

// Re-export all public items
pub use auth::*;
pub use ideas::*;

/// Failure talking to the admin API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request never completed (server down, CORS, offline)
    #[error("request failed: {0}")]
    Transport(String),
    /// Session missing or expired (401/403)
    #[error("not authorized (HTTP {0})")]
    Unauthorized(u16),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    fn transport(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
