//! Web App which shows parliamentary motions and filters them by faction votes.

#![allow(clippy::empty_structs_with_brackets, clippy::same_name_method)] // Triggered by leptos
#![allow(
    clippy::missing_docs_in_private_items,
    clippy::panic,
    clippy::expect_used
)]

use leptos::*;
use moties_engine::Config;

use crate::{
    components::{FilterPanel, MotionList},
    controller::Controller,
};

mod components;
mod controller;
mod logger;

/// Main component.
#[component]
fn App() -> impl IntoView {
    let origin = web_sys::window()
        .expect("No window found")
        .location()
        .origin()
        .expect("No origin of the page");
    let config = Config::for_origin(&origin).expect("Page origin is not a valid url");

    let controller = Controller::new(&config);
    controller.load_factions();
    controller.apply_filter();

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Tweede Kamer Moties"</h1>
                <p>"Analyseer stemgedrag van politieke partijen op ingediende moties"</p>
            </header>
            <div class="layout">
                <FilterPanel controller=controller.clone()/>
                <MotionList controller=controller/>
            </div>
        </div>
    }
}

fn main() {
    if let Err(error) = logger::init() {
        web_sys::console::error_1(&format!("Failed to initialize logger: {error}").into());
    }

    leptos::mount_to_body(App)
}
