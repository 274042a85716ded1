//! Dashboard Page Component
//!
//! Idea list with live filter, manual refresh and a 10 s auto-refresh.

use chrono::Utc;
use idea_view::{
    total_count, visible_rows, AdminConfig, DashboardState, DashboardStateStoreFields,
    DateRenderer, FetchAction,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{IdeaTable, LogoutButton, StatusBadge};
use crate::context::use_app_context;
use crate::dom::{self, BrowserDateRenderer};
use crate::poller::Poller;
use crate::store::{store_begin_fetch, store_finish_fetch, store_set_query, DashboardStore};

/// Fetch the idea list once and fold the reply into the store.
///
/// Overlapping calls are allowed; replies to superseded calls are dropped.
pub fn fetch_ideas(store: DashboardStore, config: AdminConfig) {
    let ticket = store_begin_fetch(&store);
    log::debug!("fetching ideas (ticket {})", ticket.get());

    spawn_local(async move {
        let outcome = commands::fetch_outcome(&config).await;
        let updated_at = BrowserDateRenderer.format_time(Utc::now());

        match store_finish_fetch(&store, ticket, outcome, updated_at) {
            FetchAction::RedirectToLogin => {
                log::info!("session expired, redirecting to {}", config.login_route);
                dom::navigate_to(&config.login_route);
            }
            FetchAction::Discarded => {
                log::debug!("dropped reply to superseded ticket {}", ticket.get());
            }
            FetchAction::Rendered | FetchAction::WentOffline => {}
        }
    });
}

#[component]
pub fn DashboardPage(
    /// Render the logout control
    #[prop(default = true)]
    show_logout: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config().clone();

    let store: DashboardStore = Store::new(DashboardState::new());
    provide_context(store);

    let rows = Memo::new(move |_| {
        let all = store.all().read();
        let query = store.query().read();
        visible_rows(&all, &query, &BrowserDateRenderer)
    });
    let shown = move || rows.with(|rows| rows.len());
    let total = move || total_count(store.total().get(), store.all().read().len());

    // Initial load, then refresh until the page is torn down
    fetch_ideas(store, config.clone());
    let poller = StoredValue::new_local(Some(Poller::start(config.poll_interval, {
        let config = config.clone();
        move || fetch_ideas(store, config.clone())
    })));
    on_cleanup(move || {
        poller.try_update_value(|slot| {
            if let Some(mut poller) = slot.take() {
                poller.stop();
            }
        });
    });

    let refresh = move |_| fetch_ideas(store, config.clone());

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Ideas"</h1>
                <StatusBadge />
                <Show when=move || show_logout>
                    <LogoutButton />
                </Show>
            </header>

            <div class="toolbar">
                <input
                    id="q"
                    type="search"
                    placeholder="Filter ideas…"
                    prop:value=move || store.query().get()
                    on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                />
                <button id="refreshBtn" type="button" class="btn" on:click=refresh>
                    "Refresh"
                </button>
            </div>

            <p class="counts">
                "Showing " <span id="count">{shown}</span>
                " of " <span id="total">{total}</span>
                " · updated " <span id="updated">{move || store.updated_at().get().unwrap_or_default()}</span>
            </p>

            <IdeaTable rows=rows />
        </div>
    }
}
