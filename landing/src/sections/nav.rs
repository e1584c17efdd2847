use leptos::prelude::*;
use nova_core::routing::{Location, nav_items};

/// Thin dark strip above the header.
#[component]
pub fn UtilityBar() -> impl IntoView {
    view! {
        <div class="utility-bar">
            <div class="container utility-inner">
                <span class="utility-label">"Global Education Standard"</span>
                <div class="utility-links">
                    <a href="#/" class="utility-link">"Student Portal"</a>
                    <a href="#/" class="utility-link">"Faculty"</a>
                    <a href="#/" class="utility-link">"News"</a>
                </div>
            </div>
        </div>
    }
}

/// Wordmark linking home.
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <a href="#/" class="brand-mark">
            <span class="brand-name">"NOVA VISTA"</span>
            <span class="brand-sub">"Education"</span>
        </a>
    }
}

/// The four primary links. The one matching `location` gets `active`.
#[component]
pub fn NavLinks(
    #[prop(into)] location: Signal<Location>,
    /// Class of each link
    #[prop(into)]
    link_class: String,
    /// Called after a link is followed (the mobile panel closes itself)
    #[prop(optional)]
    on_follow: Option<Callback<()>>,
) -> impl IntoView {
    nav_items()
        .into_iter()
        .map(|item| {
            let base = link_class.clone();
            let href = item.href.clone();
            let label = item.label.clone();
            let class = move || {
                if item.is_active(&location.get()) {
                    format!("{base} active")
                } else {
                    base.clone()
                }
            };
            view! {
                <a
                    href=href
                    class=class
                    on:click=move |_| {
                        if let Some(on_follow) = on_follow {
                            on_follow.run(());
                        }
                    }
                >
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_at(hash: &str) -> String {
        let location = Signal::stored(Location::parse_hash(hash));
        view! { <NavLinks location=location link_class="nav-link" /> }.to_html()
    }

    /// `href` of the highlighted link (href is rendered before class).
    fn active_href(html: &str) -> Option<&str> {
        let before = &html[..html.find("nav-link active")?];
        let start = before.rfind("href=\"")? + "href=\"".len();
        let len = before[start..].find('"')?;
        Some(&before[start..start + len])
    }

    #[test]
    fn renders_four_links_in_order() {
        let html = render_at("#/");
        let home = html.find("Home").expect("home");
        let academic = html.find("Academic Recognition").expect("academic");
        let skills = html.find("Skill Development").expect("skills");
        let contact = html.find("Contact").expect("contact");
        assert!(home < academic && academic < skills && skills < contact);
    }

    #[test]
    fn highlights_the_current_page() {
        let html = render_at("#/contact");
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(active_href(&html), Some("#/contact"));
    }

    #[test]
    fn home_is_highlighted_only_without_an_anchor() {
        assert_eq!(active_href(&render_at("#/")), Some("#/"));
        assert_eq!(active_href(&render_at("")), Some("#/"));
    }

    #[test]
    fn highlights_in_page_anchors_instead_of_home() {
        let html = render_at("#/#skills");
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert_eq!(active_href(&html), Some("#/#skills"));
    }

    #[test]
    fn unknown_routes_highlight_nothing() {
        let html = render_at("#/nowhere");
        assert!(!html.contains("nav-link active"));
    }
}
