//! Dex Tracker Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod filter;
mod models;
mod owned;
mod session;
mod share;
mod state;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
