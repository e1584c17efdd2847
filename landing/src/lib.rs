//! Nova Vista Education website.
//!
//! Client-side Leptos app: a fragment-routed shell around the Home and
//! Contact pages, fed by the mock service in `nova_core`.

pub mod app;
pub mod browser;
pub mod layout;
pub mod pages;
pub mod sections;
pub mod tasks;
pub mod telemetry;

pub use app::App;

/// Browser entry point: panic hook, config, logging, then mount.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = app::load_config();
    telemetry::init(&config.telemetry.level);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "site.toml rejected, using defaults");
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        validate_contact = config.service.validate_contact,
        "starting Nova Vista site"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
