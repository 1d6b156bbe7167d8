//! Week Planner Frontend Entry Point

mod app;
mod calendar;
mod components;
mod config;
mod context;
mod drag;
mod filter;
mod models;
mod planner;
mod presentation;
mod storage;
mod store;
mod week;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(AppConfig::default().log_level) {
        leptos::logging::warn!("logger already initialised: {}", err);
    }
    mount_to_body(App);
}
