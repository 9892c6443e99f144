//! Giveaway Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod format;
mod models;
mod pages;
mod pagination;
mod query;
mod router;
mod search;
mod session;
mod staging;
mod store;
mod theme;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if let Err(e) = browser_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    let config = AppConfig::load();
    log::info!("starting giveaway frontend (api: {})", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
