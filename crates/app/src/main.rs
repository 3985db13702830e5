use client::{load_config, ApiClient};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod components;
mod format_helpers;
mod object_url;
mod photo;
mod query;
mod routes;
mod view_mode;

use query::use_query_cache_provider;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Map the configured level name to a tracing level, `INFO` when unknown.
fn log_level(name: &str) -> Level {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() {
    let config = load_config();
    if let Err(e) = dioxus::logger::init(log_level(&config.logging.level)) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!(
        api = %config.api.base_url,
        layout = ?config.features.detail_layout,
        "Starting asset desk"
    );
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = load_config();
    use_context_provider(|| ApiClient::from_config(config));
    use_context_provider(|| config.features.clone());
    use_query_cache_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
