//! Dashboard State
//!
//! Owned state container for the dashboard. The fetch completion is the
//! only writer of `all`; the filtered view is always recomputed from
//! `all` and `query`.

use reactive_stores::Store;

use crate::models::{Idea, IdeasResponse};
use crate::sequence::FetchSequencer;

/// Connectivity shown in the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Syncing,
    Online,
    Offline,
}

impl SyncStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Syncing => "syncing…",
            SyncStatus::Online => "online",
            SyncStatus::Offline => "offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SyncStatus::Syncing => "status-syncing",
            SyncStatus::Online => "status-online",
            SyncStatus::Offline => "status-offline",
        }
    }
}

/// What the ideas endpoint gave back
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(IdeasResponse),
    /// 401 or 403: the session is gone
    Unauthorized,
    /// Transport error, unexpected status or undecodable body
    Failed(String),
}

/// State change decided for a finished fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEffect {
    RedirectToLogin,
    /// Reply to a superseded request; dropped
    Stale,
    Loaded {
        ideas: Vec<Idea>,
        total: Option<u64>,
        updated_at: String,
    },
    Offline,
}

/// Summary of an applied effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAction {
    Rendered,
    WentOffline,
    Discarded,
    RedirectToLogin,
}

impl FetchEffect {
    pub fn action(&self) -> FetchAction {
        match self {
            FetchEffect::RedirectToLogin => FetchAction::RedirectToLogin,
            FetchEffect::Stale => FetchAction::Discarded,
            FetchEffect::Loaded { .. } => FetchAction::Rendered,
            FetchEffect::Offline => FetchAction::WentOffline,
        }
    }
}

/// Decide what a finished fetch does.
///
/// An expired session redirects even for a superseded request.
pub fn resolve_fetch(is_latest: bool, outcome: FetchOutcome, updated_at: String) -> FetchEffect {
    match outcome {
        FetchOutcome::Unauthorized => FetchEffect::RedirectToLogin,
        _ if !is_latest => FetchEffect::Stale,
        FetchOutcome::Loaded(body) => FetchEffect::Loaded {
            ideas: body.ideas.unwrap_or_default(),
            total: body.total,
            updated_at,
        },
        FetchOutcome::Failed(reason) => {
            log::debug!("idea fetch failed: {}", reason);
            FetchEffect::Offline
        }
    }
}

/// Server total when provided, else the number of loaded ideas
pub fn total_count(total: Option<u64>, loaded: usize) -> u64 {
    total.unwrap_or(loaded as u64)
}

/// Dashboard state with field-level reactivity
#[derive(Debug, Clone, Default, Store)]
pub struct DashboardState {
    /// Ideas from the last accepted fetch, unfiltered
    pub all: Vec<Idea>,
    /// Server-reported total from the last accepted fetch
    pub total: Option<u64>,
    /// Filter text as typed
    pub query: String,
    pub status: SyncStatus,
    /// Transient "fetch in progress" flag driving the pulsing style
    pub syncing: bool,
    /// Local time of the last accepted fetch
    pub updated_at: Option<String>,
    pub sequencer: FetchSequencer,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }
}
