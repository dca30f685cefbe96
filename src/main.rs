mod app;
mod core;
mod features;
mod models;
mod pages;

use app::App;
use crate::core::{logging, BoardConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let bundled = BoardConfig::bundled();
    let config = bundled.clone().unwrap_or_default();
    logging::init(config.log_level());
    if let Err(e) = bundled {
        log::warn!("{}; using defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
