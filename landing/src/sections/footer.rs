use chrono::Datelike;
use leptos::prelude::*;
use nova_core::types::MetaData;

const DEFAULT_BLURB: &str =
    "Empowering Growth. Elevating Futures through academic recognition and skill enhancement.";

#[component]
pub fn Footer(
    /// Site metadata once it has loaded; the footer is complete without it
    meta: Option<MetaData>,
) -> impl IntoView {
    let year = chrono::Utc::now().year();
    let blurb = meta
        .as_ref()
        .map(|meta| {
            format!(
                "{} Through academic recognition and skill enhancement.",
                meta.brand.tagline
            )
        })
        .unwrap_or_else(|| DEFAULT_BLURB.to_string());
    let offices = meta.map(|meta| meta.offices).unwrap_or_default();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">"NOVA VISTA"</span>
                    <p class="footer-blurb">{blurb}</p>
                </div>

                <div class="footer-column">
                    <p class="kicker">"Headquarters"</p>
                    <p class="footer-address">"10 Hudson Yards"</p>
                    <p class="footer-address">"New York, NY 10001"</p>
                    <p class="footer-phone">"+1 (415) 555-0110"</p>
                    {(!offices.is_empty()).then(|| view! {
                        <ul class="footer-offices">
                            {offices.into_iter().map(|office| view! {
                                <li class="footer-office">{office.city}", "{office.region}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    })}
                </div>

                <div class="footer-column">
                    <p class="kicker">"Programs"</p>
                    <ul class="footer-links">
                        <li><a href="#/#academic" class="footer-link">"Academic Recognition"</a></li>
                        <li><a href="#/#skills" class="footer-link">"Skill Development"</a></li>
                        <li><a href="#/contact" class="footer-link">"Admissions"</a></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <p class="kicker">"Connect"</p>
                    <div class="footer-social">
                        <a href="https://www.linkedin.com" target="_blank" rel="noopener" class="footer-link">"LinkedIn"</a>
                        <span class="footer-dot">"·"</span>
                        <a href="https://www.youtube.com" target="_blank" rel="noopener" class="footer-link">"YouTube"</a>
                        <span class="footer-dot">"·"</span>
                        <a href="https://x.com" target="_blank" rel="noopener" class="footer-link">"X (Twitter)"</a>
                    </div>
                    <a href="#/contact" class="btn btn-outline">"Contact Us"</a>
                </div>
            </div>
            <p class="container footer-copyright">
                {format!("© {year} Nova Vista Education. All rights reserved.")}
            </p>
        </footer>
    }
}
