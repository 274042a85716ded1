//! Idea Admin Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod dom;
mod poller;
mod store;

use app::{App, Page, MOUNT_ID};
use idea_view::AdminConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    let config = AdminConfig::default();
    let root = dom::element_by_id(MOUNT_ID);
    let marker = root.as_ref().and_then(|el| el.get_attribute("data-page"));
    let path = dom::current_path().unwrap_or_default();
    let page = Page::detect(marker.as_deref(), &path, &config);
    log::info!("mounting {:?} page", page);

    match root.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(root) => mount_to(root, move || view! { <App config=config page=page /> }).forget(),
        None => {
            log::error!("#{} not found, mounting to body", MOUNT_ID);
            mount_to_body(move || view! { <App config=config page=page /> });
        }
    }
}
