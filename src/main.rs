#![allow(warnings)]
//! Cloth Inventory Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod photo;
mod inventory;
mod session;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("starting cloth inventory frontend");
    mount_to_body(App);
}
