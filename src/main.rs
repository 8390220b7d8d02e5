//! Shopping List Frontend Entry Point

mod models;
mod intent;
mod error;
mod storage;
mod list_store;
mod item_view;
mod config;
mod logger;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
