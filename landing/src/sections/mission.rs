use super::Reveal;
use leptos::prelude::*;
use nova_core::types::Stat;

/// "Our Mission" block with the headline figures underneath.
#[component]
pub fn Mission(
    /// Figures from site metadata; `None` while loading or when there are none
    stats: Option<Vec<Stat>>,
) -> impl IntoView {
    view! {
        <section class="mission">
            <div class="container narrow">
                <Reveal>
                    <h2 class="section-heading">"Our Mission"</h2>
                    <p class="mission-statement">
                        "Nova Vista Education supports individuals at different stages of their journey: "
                        "from those seeking formal acknowledgment of their professional contributions "
                        "to those building the confidence and communication needed for career advancement."
                    </p>
                </Reveal>
                <StatsGrid stats=stats.unwrap_or_default() />
            </div>
        </section>
    }
}

/// Stat tiles. Renders nothing at all for an empty list.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn StatsGrid(stats: Vec<Stat>) -> impl IntoView {
    if stats.is_empty() {
        return view! {}.into_any();
    }

    view! {
        <div class="stats-grid">
            {stats.into_iter().enumerate().map(|(idx, stat)| {
                let delay = u32::try_from(idx).unwrap_or(0) * 100;
                view! {
                    <Reveal class="stat-tile" delay_ms=delay>
                        <p class="stat-value">{stat.value}</p>
                        <p class="stat-label">{stat.label}</p>
                    </Reveal>
                }
            }).collect::<Vec<_>>()}
        </div>
    }.into_any()
}
