use leptos::prelude::*;

#[component]
pub fn Hero(
    #[prop(into)] tagline: String,
    #[prop(into)] headline: String,
    #[prop(into)] subline: String,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-inner">
                <p class="kicker hero-kicker">{tagline}</p>
                <h1 class="hero-title">{headline}</h1>
                <p class="hero-subline">{subline}</p>
                <div class="hero-actions">
                    <a href="#/contact" class="btn btn-primary">"Apply Now"</a>
                    <a href="#/#academic" class="btn btn-secondary">"View Programs"</a>
                </div>
            </div>
        </section>
    }
}
