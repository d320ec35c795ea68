//! Litmus Blog Frontend Entry Point

mod app;
mod color_cycle;
mod components;
mod config;
mod context;
mod error;
mod markdown;
mod models;
mod pipeline;
mod preferences;
mod repository;
mod store;
mod timezone;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
