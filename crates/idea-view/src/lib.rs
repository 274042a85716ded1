//! Idea View
//!
//! Rendering-independent logic for the idea admin panel.
//! Everything here compiles and tests natively; the browser crate only
//! wires these pieces to the DOM, the network and local storage.

mod config;
mod error;
mod filter;
mod format;
mod login;
mod models;
mod remember;
mod rows;
mod sequence;
mod state;

#[cfg(test)]
mod tests;

pub use config::AdminConfig;
pub use error::{ViewError, ViewResult};
pub use filter::{filter_ideas, normalize_query};
pub use format::{fmt_date, parse_timestamp, safe_text, ChronoRenderer, DateRenderer};
pub use login::{classify_login, parse_login_body, LoginOutcome, LOGIN_FAILED_MESSAGE};
pub use models::{Idea, IdeaId, IdeasResponse, LoginRequest, LoginResponse};
pub use remember::{persist_username, remembered_username, KeyValueStore};
pub use rows::{render_rows, visible_rows, IdeaRow};
pub use sequence::{FetchSequencer, FetchTicket};
pub use state::{
    resolve_fetch, total_count, DashboardState, DashboardStateStoreFields, FetchAction,
    FetchEffect, FetchOutcome, SyncStatus,
};
