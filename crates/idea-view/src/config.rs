//! Panel Configuration
//!
//! Backend base path, navigation routes and fixed timings.

use std::time::Duration;

/// Default backend port named in the connectivity error banner
const DEFAULT_BACKEND_PORT: u16 = 5001;

/// Refresh period of the dashboard poller
const POLL_INTERVAL: Duration = Duration::from_millis(10_000);

/// Static configuration shared by the login and dashboard pages.
///
/// `api_base` may be baked in at build time through the
/// `IDEA_ADMIN_API_BASE` environment variable; everything else is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Prefix prepended to every `/api/...` path (empty = same origin)
    pub api_base: String,
    /// Port the backend is expected on, shown when it is unreachable
    pub backend_port: u16,
    pub dashboard_route: String,
    pub login_route: String,
    /// Web route that tears the session down server-side
    pub logout_route: String,
    /// Local storage key holding the remembered username
    pub remember_key: String,
    pub poll_interval: Duration,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("IDEA_ADMIN_API_BASE")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            backend_port: DEFAULT_BACKEND_PORT,
            dashboard_route: "/admin".to_string(),
            login_route: "/admin/login".to_string(),
            logout_route: "/admin/logout".to_string(),
            remember_key: "admin_username".to_string(),
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl AdminConfig {
    fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub fn login_url(&self) -> String {
        self.api("/api/admin/login")
    }

    pub fn ideas_url(&self) -> String {
        self.api("/api/admin/ideas")
    }

    pub fn logout_api_url(&self) -> String {
        self.api("/api/admin/logout")
    }

    /// Banner text for a login request that never completed
    pub fn network_error_message(&self) -> String {
        format!(
            "Network/Server error. Is the API server running on :{}?",
            self.backend_port
        )
    }
}
