//! GearCrate Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod messages;
mod dialog;
mod commands;
mod search;
mod quick_update;
mod debounce;
mod context;
mod store;
mod actions;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.log_level);
    log::info!("[App] Starting with API base {}", config.api_base);
    config::install(config);

    mount_to_body(App);
}
