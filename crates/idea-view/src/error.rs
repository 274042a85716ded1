//! View-layer errors

use thiserror::Error;

/// Result alias for fallible view helpers
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors raised by the pure helpers.
///
/// None of these ever reach the user directly; callers turn them into a
/// fallback value and a log record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("not a recognised timestamp: {0:?}")]
    InvalidTimestamp(String),
    #[error("client storage unavailable: {0}")]
    StorageUnavailable(String),
}
