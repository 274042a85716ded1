//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use idea_view::{
    resolve_fetch, DashboardState, DashboardStateStoreFields, FetchAction, FetchEffect,
    FetchOutcome, FetchTicket, SyncStatus,
};
use leptos::prelude::*;
use reactive_stores::Store;

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flag a fetch as in progress and issue its ticket
pub fn store_begin_fetch(store: &DashboardStore) -> FetchTicket {
    store.status().set(SyncStatus::Syncing);
    store.syncing().set(true);
    store.sequencer().write().issue()
}

/// Apply a finished fetch; only the latest ticket may change state
pub fn store_finish_fetch(
    store: &DashboardStore,
    ticket: FetchTicket,
    outcome: FetchOutcome,
    updated_at: String,
) -> FetchAction {
    // A store disposed with its page treats every reply as stale
    let is_latest = store
        .sequencer()
        .try_with_untracked(|seq| seq.is_latest(ticket))
        .unwrap_or(false);
    let effect = resolve_fetch(is_latest, outcome, updated_at);
    let action = effect.action();

    match effect {
        FetchEffect::RedirectToLogin | FetchEffect::Stale => {}
        FetchEffect::Loaded { ideas, total, updated_at } => {
            store.all().set(ideas);
            store.total().set(total);
            store.updated_at().set(Some(updated_at));
            store.status().set(SyncStatus::Online);
            store.syncing().set(false);
        }
        FetchEffect::Offline => {
            store.status().set(SyncStatus::Offline);
            store.syncing().set(false);
        }
    }
    action
}

/// Replace the filter text
pub fn store_set_query(store: &DashboardStore, query: String) {
    store.query().set(query);
}
