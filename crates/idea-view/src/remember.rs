//! Remembered Username
//!
//! "Remember me" persistence over any string key-value store.

use crate::error::ViewResult;

/// Minimal client-side key-value storage (browser local storage in the UI)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ViewResult<()>;
    fn remove(&self, key: &str) -> ViewResult<()>;
}

/// Previously remembered username; an empty stored value counts as none
pub fn remembered_username<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    store.get(key).filter(|name| !name.is_empty())
}

/// Store `username` when `remember` is set, forget any stored one otherwise
pub fn persist_username<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    remember: bool,
    username: &str,
) -> ViewResult<()> {
    if remember {
        store.set(key, username)
    } else {
        store.remove(key)
    }
}
