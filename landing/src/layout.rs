//! Persistent chrome around whichever page is routed: utility bar, sticky
//! header, mobile menu and footer.

use crate::app::SiteService;
use crate::browser;
use crate::sections::{BrandMark, Footer, NavLinks, UtilityBar};
use crate::tasks::{spawn_scoped, use_task_scope};
use leptos::prelude::*;
use nova_core::chrome::{self, MenuState};
use nova_core::config::SiteConfig;
use nova_core::routing::Location;
use nova_core::types::MetaData;

#[component]
pub fn Layout(location: ReadSignal<Location>, children: Children) -> impl IntoView {
    let service = expect_context::<SiteService>();
    let threshold = expect_context::<SiteConfig>().chrome.scroll_threshold;

    // Footer tagline and office list.
    let (meta, set_meta) = signal(None::<MetaData>);
    let scope = use_task_scope();
    spawn_scoped(
        &scope,
        async move { service.fetch_meta().await },
        move |result| match result {
            Ok(meta) => set_meta.set(Some(meta)),
            Err(err) => tracing::warn!(error = %err, "footer metadata unavailable"),
        },
    );

    let scrolled = RwSignal::new(chrome::is_scrolled(browser::scroll_offset(), threshold));
    #[cfg(target_arch = "wasm32")]
    {
        let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
            let now = chrome::is_scrolled(browser::scroll_offset(), threshold);
            if now != scrolled.get_untracked() {
                scrolled.set(now);
            }
        });
        on_cleanup(move || scroll_listener.remove());
    }

    let menu = RwSignal::new(MenuState::default());
    let close_menu = Callback::new(move |()| menu.update(MenuState::close));

    view! {
        <div class="site">
            <UtilityBar />
            <header class=move || chrome::header_class(scrolled.get())>
                <div class="container header-inner">
                    <BrandMark />
                    <nav class="desktop-nav">
                        <NavLinks location=location link_class="nav-link" />
                        <a href="#/contact" class="btn btn-primary nav-cta">"Apply Now"</a>
                    </nav>
                    <button
                        class=move || if menu.get().is_open() { "menu-button open" } else { "menu-button" }
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        <span class="menu-bar"></span>
                        <span class="menu-bar"></span>
                        <span class="menu-bar"></span>
                    </button>
                </div>
            </header>

            <div class=move || menu.get().panel_class()>
                <nav class="mobile-nav">
                    <NavLinks location=location link_class="mobile-link" on_follow=close_menu />
                </nav>
            </div>

            <main class="site-main">{children()}</main>

            {move || view! { <Footer meta=meta.get() /> }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::with_site;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn chrome_starts_unscrolled_with_the_menu_closed() {
        let html = with_site(|| {
            let (location, _) = signal(Location::root());
            view! { <Layout location=location><p class="page-body">"body"</p></Layout> }.to_html()
        });
        assert!(html.contains("class=\"site-header\""));
        assert!(!html.contains("scrolled"));
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("page-body"));
    }

    #[test]
    fn footer_renders_before_metadata_arrives() {
        let html = with_site(|| {
            let (location, _) = signal(Location::root());
            view! { <Layout location=location><p class="page-body">"body"</p></Layout> }.to_html()
        });
        assert!(html.contains("All rights reserved."));
        assert!(!html.contains("footer-offices"));
    }
}
