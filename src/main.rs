//! Recipe Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod fetching;
mod line_items;
mod models;
mod notify;
mod pages;
mod schema;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
