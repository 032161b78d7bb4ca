//! Browser portal for the WCPMS water supply management system.
//!
//! Routes, layouts and components only compile for `wasm32`; the decision
//! logic behind them (route guard, session parsing, form validation, contract
//! filters, profile formatting, config) is plain Rust so it can be tested on
//! the host.

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub use crate::app::App;

/// Installs logging and mounts the application on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    let config = app_lib::config::AppConfig::load();
    app_lib::logging::init(&config.log_level);
    tracing::info!(
        api_base_url = %config.api_base_url,
        commit = app_lib::GIT_COMMIT_HASH,
        "starting portal"
    );
    leptos::mount::mount_to_body(App);
}
