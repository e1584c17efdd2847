// Home page: hero, mission, programs, long-form sections and insights.
use crate::app::SiteService;
use crate::browser;
use crate::sections::{
    AcademicRecognition, Hero, Insights, Mission, ProgramHighlights, SkillDevelopment,
};
use crate::tasks::{spawn_scoped, use_task_scope};
use leptos::prelude::*;
use nova_core::config::SiteConfig;
use nova_core::load::LoadState;
use nova_core::routing::{Location, Page};
use nova_core::types::{Article, MetaData, Program, Stat};

/// Element the home page should bring into view for `location`, if any.
/// Anchors addressed to another page are left alone.
fn scroll_target(location: &Location) -> Option<&str> {
    match location.page() {
        Page::Home => location.anchor(),
        Page::Contact => None,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let service = expect_context::<SiteService>();
    let anchor_delay = expect_context::<SiteConfig>().chrome.anchor_scroll_delay();
    let location = expect_context::<ReadSignal<Location>>();
    let scope = use_task_scope();

    let programs = RwSignal::new(LoadState::<Vec<Program>>::Pending);
    let meta = RwSignal::new(LoadState::<MetaData>::Pending);
    let articles = RwSignal::new(LoadState::<Vec<Article>>::Pending);

    // Three independent requests; each section fills in as its data lands.
    {
        let service = service.clone();
        spawn_scoped(
            &scope,
            async move { service.fetch_programs().await },
            move |result| {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "programs unavailable");
                }
                programs.set(result.into());
            },
        );
    }
    {
        let service = service.clone();
        spawn_scoped(
            &scope,
            async move { service.fetch_meta().await },
            move |result| {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "site metadata unavailable");
                }
                meta.set(result.into());
            },
        );
    }
    spawn_scoped(
        &scope,
        async move { service.fetch_articles().await },
        move |result| {
            match &result {
                Ok(list) => tracing::debug!(count = list.len(), "articles loaded"),
                Err(err) => tracing::warn!(error = %err, "articles unavailable"),
            }
            articles.set(result.into());
        },
    );

    // Deep links: re-armed whenever the articles or the fragment change.
    Effect::new(move || {
        articles.track();
        let anchor = location.with(|location| scroll_target(location).map(str::to_string));
        if let Some(anchor) = anchor {
            set_timeout(
                move || {
                    browser::scroll_to_anchor(&anchor);
                },
                anchor_delay,
            );
        }
    });

    view! {
        <Hero
            tagline="Nova Vista Education"
            headline="Empowering Growth. Elevating Futures."
            subline="A platform committed to academic recognition and personal skill enhancement."
        />
        {move || {
            let stats = meta.with(|meta| {
                meta.ready()
                    .and_then(MetaData::visible_stats)
                    .map(<[Stat]>::to_vec)
            });
            view! { <Mission stats=stats /> }
        }}
        {move || view! { <ProgramHighlights programs=programs.get() /> }}
        <AcademicRecognition />
        <SkillDevelopment />
        {move || {
            let (list, error) = articles.with(|state| {
                (state.ready().cloned().unwrap_or_default(), state.error().cloned())
            });
            view! { <Insights articles=list error=error /> }
        }}
    }
}
