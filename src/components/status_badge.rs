//! Status Badge Component

use idea_view::{DashboardStateStoreFields, SyncStatus};
use leptos::prelude::*;

use crate::store::use_dashboard_store;

/// Connectivity indicator; pulses while a fetch is in flight
#[component]
pub fn StatusBadge() -> impl IntoView {
    let store = use_dashboard_store();

    let class = move || {
        let status: SyncStatus = store.status().get();
        if store.syncing().get() {
            format!("status {} flicker", status.css_class())
        } else {
            format!("status {}", status.css_class())
        }
    };

    view! {
        <span id="status" class=class>
            {move || store.status().get().label()}
        </span>
    }
}
