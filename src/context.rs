//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use std::sync::Arc;

use idea_view::AdminConfig;
use leptos::prelude::*;

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AdminConfig>,
}

impl AppContext {
    pub fn new(config: AdminConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    /// Backend paths, routes and timings
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }
}

/// Get the app context; provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
