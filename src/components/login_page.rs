//! Login Page Component
//!
//! Credentials form with "remember me" and an inline error banner.

use idea_view::{persist_username, remembered_username, AdminConfig, LoginOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::dom;

/// Values captured from the form at submit time
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Already trimmed
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Run one login attempt.
///
/// The banner is cleared first; the username is remembered or forgotten
/// before the request, whatever its outcome.
pub async fn handle_login(form: LoginForm, config: AdminConfig, set_banner: WriteSignal<Option<String>>) {
    set_banner.set(None);

    if let Some(storage) = dom::local_storage() {
        if let Err(err) = persist_username(&storage, &config.remember_key, form.remember, &form.username) {
            log::warn!("could not update remembered username: {}", err);
        }
    }

    match commands::login(&config, &form.username, &form.password).await {
        Ok(LoginOutcome::Success) => {
            log::info!("login accepted for {}", form.username);
            dom::navigate_to(&config.dashboard_route);
        }
        Ok(LoginOutcome::Rejected(message)) => {
            set_banner.set(Some(message));
        }
        Err(err) => {
            log::warn!("login request failed: {}", err);
            set_banner.set(Some(config.network_error_message()));
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let remembered = dom::local_storage()
        .and_then(|storage| remembered_username(&storage, &ctx.config().remember_key));

    let (username, set_username) = signal(remembered.clone().unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(remembered.is_some());
    let (banner, set_banner) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let form = LoginForm {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        let config = ctx.config().clone();
        set_pending.set(true);
        spawn_local(async move {
            handle_login(form, config, set_banner).await;
            set_pending.set(false);
        });
    });

    view! {
        <div class="login-card">
            <h1>"Admin Login"</h1>

            <Show when=move || banner.get().is_some()>
                <div id="flash" class="flash">
                    {move || banner.get().unwrap_or_default()}
                </div>
            </Show>

            <label for="username">"Username"</label>
            <input
                id="username"
                type="text"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />

            <label for="password">"Password"</label>
            <input
                id="password"
                type="password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />

            <label class="remember">
                <input
                    id="remember"
                    type="checkbox"
                    prop:checked=move || remember.get()
                    on:change=move |ev| set_remember.set(event_target_checked(&ev))
                />
                "Remember me"
            </label>

            <button
                id="loginBtn"
                type="button"
                class="btn"
                disabled=move || pending.get()
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                {move || if pending.get() { "Signing in…" } else { "Login" }}
            </button>
        </div>
    }
}
