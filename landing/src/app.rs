//! Routing shell: config, service and location live here.

use crate::browser;
use crate::layout::Layout;
use crate::pages::{ContactPage, HomePage};
use leptos::prelude::*;
use nova_core::config::SiteConfig;
use nova_core::routing::{Location, Page};
use nova_core::{ConfigError, DataService};

/// What the data service sleeps through: `setTimeout` in the browser,
/// tokio in native builds.
#[cfg(target_arch = "wasm32")]
pub type SiteTimer = browser::BrowserTimer;
#[cfg(not(target_arch = "wasm32"))]
pub type SiteTimer = nova_core::TokioTimer;

/// The data service the pages share.
pub type SiteService = DataService<SiteTimer>;

/// `site.toml`, embedded at build time.
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the embedded config. A broken file falls back to defaults and the
/// error is handed back so the caller can report it once logging is up.
pub fn load_config() -> (SiteConfig, Option<ConfigError>) {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let service = SiteService::new(SiteTimer::default(), config.service.clone());
    provide_context(service);
    provide_context(config);

    let location = RwSignal::new(browser::current_location());
    provide_context(location.read_only());

    #[cfg(target_arch = "wasm32")]
    {
        let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
            let next = browser::current_location();
            tracing::debug!(path = next.path(), anchor = ?next.anchor(), "route changed");
            location.set(next);
        });
        on_cleanup(move || hash_listener.remove());
    }

    // Anchor-only changes keep the page mounted.
    let page = Memo::new(move |_| location.with(Location::page));

    view! {
        <Layout location=location.read_only()>
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Contact => view! { <ContactPage /> }.into_any(),
            }}
        </Layout>
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::with_site;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let (config, error) = load_config();
        assert!(error.is_none(), "site.toml should parse: {error:?}");
        assert_eq!(config.chrome.scroll_threshold, 20.0);
        assert_eq!(config.service.delays.submit_ms, 1500);
    }

    #[test]
    fn native_shell_routes_to_home_inside_the_layout() {
        let config = SiteConfig {
            service: nova_core::config::ServiceConfig::instant(),
            ..SiteConfig::default()
        };
        let html = with_site(|| view! { <App config=config /> }.to_html());

        let header = html.find("class=\"site-header\"").expect("header");
        let mission = html.find("Our Mission").expect("home page");
        let footer = html.find("All rights reserved.").expect("footer");
        assert!(header < mission && mission < footer);
        assert!(!html.contains("contact-form"));
    }
}
