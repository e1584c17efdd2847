use super::Reveal;
use leptos::prelude::*;
use nova_core::routing::ANCHOR_SKILLS;

struct Pillar {
    title: &'static str,
    blurb: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Communication",
        blurb: "Mastering the art of public speaking and persuasive rhetoric.",
    },
    Pillar {
        title: "Presence",
        blurb: "Cultivating an executive aura through grooming and etiquette.",
    },
];

#[component]
pub fn SkillDevelopment() -> impl IntoView {
    view! {
        <section id=ANCHOR_SKILLS class="program-section skills">
            <div class="skew-panel"></div>
            <div class="container split reversed">
                <Reveal class="zoom-in figure">
                    <div class="figure-accent muted"></div>
                    <img
                        src="https://picsum.photos/800/1000?image=20"
                        alt="Professional Development"
                        class="figure-image grayscale"
                    />
                </Reveal>
                <Reveal class="slide-from-right">
                    <p class="kicker">"Excellence"</p>
                    <h2 class="section-heading">"Skill & Personality Development"</h2>
                    <div class="rule rule-ink"></div>
                    <p class="lead">
                        "Structured training designed to strengthen communication, presence, grooming, "
                        "and overall confidence for professional environments. We craft leaders who are "
                        "not just skilled, but impactful."
                    </p>
                    <div class="pillar-grid">
                        {PILLARS.iter().map(|pillar| view! {
                            <div class="pillar">
                                <h3>{pillar.title}</h3>
                                <p>{pillar.blurb}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                    <a href="#/contact" class="btn btn-ink">"Enroll Now"</a>
                </Reveal>
            </div>
        </section>
    }
}
