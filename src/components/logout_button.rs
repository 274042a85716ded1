//! Logout Button Component

use idea_view::AdminConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::dom;

/// Try the API logout, then always go to the logout page.
///
/// API failures are logged and otherwise ignored; the logout page tears
/// the session down server-side as well.
pub async fn do_logout(config: AdminConfig) {
    if let Err(err) = commands::logout(&config).await {
        log::warn!("API logout failed, falling back to {}: {}", config.logout_route, err);
    }
    dom::navigate_to(&config.logout_route);
}

#[component]
pub fn LogoutButton() -> impl IntoView {
    let ctx = use_app_context();
    let href = ctx.config().logout_route.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        spawn_local(do_logout(ctx.config().clone()));
    };

    view! {
        <a id="logoutBtn" class="btn" href=href on:click=on_click>
            "Logout"
        </a>
    }
}
