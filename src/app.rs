//! Idea Admin Frontend App
//!
//! Picks the login or dashboard page and provides shared context.

use idea_view::AdminConfig;
use leptos::prelude::*;

use crate::components::{DashboardPage, LoginPage};
use crate::context::AppContext;

/// Element the app mounts into when the page provides one
pub const MOUNT_ID: &str = "app-root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
}

impl Page {
    /// Page from the mount point's `data-page` marker, else from the URL path
    pub fn detect(marker: Option<&str>, path: &str, config: &AdminConfig) -> Self {
        match marker.map(str::trim) {
            Some("login") => return Page::Login,
            Some("dashboard") => return Page::Dashboard,
            Some(other) => log::warn!("unknown data-page {:?}, using the URL path", other),
            None => {}
        }
        let path = path.trim_end_matches('/');
        if path == config.login_route.trim_end_matches('/') {
            Page::Login
        } else {
            Page::Dashboard
        }
    }
}

#[component]
pub fn App(config: AdminConfig, page: Page) -> impl IntoView {
    provide_context(AppContext::new(config));

    match page {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_wins() {
        let config = AdminConfig::default();
        assert_eq!(Page::detect(Some("login"), "/admin", &config), Page::Login);
        assert_eq!(Page::detect(Some("dashboard"), "/admin/login", &config), Page::Dashboard);
    }

    #[test]
    fn test_path_fallback() {
        let config = AdminConfig::default();
        assert_eq!(Page::detect(None, "/admin/login", &config), Page::Login);
        assert_eq!(Page::detect(None, "/admin/login/", &config), Page::Login);
        assert_eq!(Page::detect(None, "/admin", &config), Page::Dashboard);
        assert_eq!(Page::detect(Some("bogus"), "/admin/login", &config), Page::Login);
    }
}
