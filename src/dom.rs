//! Browser Helpers
//!
//! Element lookup, navigation, local storage and locale date rendering.

use chrono::{DateTime, Utc};
use idea_view::{DateRenderer, KeyValueStore, ViewError, ViewResult};
use wasm_bindgen::JsValue;

/// Element with the given id in the current document
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Current location path, e.g. `/admin/login`
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Leave the page for `url`
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("no window, cannot navigate to {}", url);
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        log::error!("navigation to {} failed: {:?}", url, err);
    }
}

/// `window.localStorage`
pub struct BrowserStorage(web_sys::Storage);

/// Local storage, if the browser allows it for this page
pub fn local_storage() -> Option<BrowserStorage> {
    let storage = web_sys::window()?.local_storage().ok().flatten();
    if storage.is_none() {
        log::warn!("local storage unavailable; username will not be remembered");
    }
    storage.map(BrowserStorage)
}

fn storage_error(err: JsValue) -> ViewError {
    ViewError::StorageUnavailable(format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> ViewResult<()> {
        self.0.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> ViewResult<()> {
        self.0.remove_item(key).map_err(storage_error)
    }
}

/// Renders instants with the browser's locale and time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDateRenderer;

impl BrowserDateRenderer {
    fn js_date(at: DateTime<Utc>) -> js_sys::Date {
        js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64))
    }
}

impl DateRenderer for BrowserDateRenderer {
    fn format_datetime(&self, at: DateTime<Utc>) -> String {
        Self::js_date(at).to_locale_string("default", &JsValue::UNDEFINED).into()
    }

    fn format_time(&self, at: DateTime<Utc>) -> String {
        Self::js_date(at).to_locale_time_string("default").into()
    }

    /// Whatever `new Date(raw)` accepts, e.g. `Jan 1, 2024`
    fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        let millis = js_sys::Date::new(&JsValue::from_str(raw)).get_time();
        if millis.is_nan() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }
}
