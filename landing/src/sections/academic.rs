use super::Reveal;
use leptos::prelude::*;
use nova_core::routing::ANCHOR_ACADEMIC;

const HIGHLIGHTS: &[&str] = &[
    "Formal acknowledgment of professional legacy",
    "Integration with global academic standards",
    "Postgraduate honorary title conferment",
    "Validation of lifelong achievement",
];

#[component]
pub fn AcademicRecognition() -> impl IntoView {
    view! {
        <section id=ANCHOR_ACADEMIC class="program-section academic">
            <div class="container split">
                <Reveal class="slide-from-left">
                    <p class="kicker">"Distinction"</p>
                    <h2 class="section-heading">"Academic Recognition"</h2>
                    <div class="rule rule-crimson"></div>
                    <p class="lead">
                        "A pathway for individuals whose work, achievements, and contributions deserve "
                        "formal acknowledgment through postgraduate honorary titles. We bridge the gap "
                        "between professional excellence and academic validation."
                    </p>
                    <ul class="bullet-list">
                        {HIGHLIGHTS.iter().map(|item| view! {
                            <li><span class="bullet">"•"</span><span>{*item}</span></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    <a href="#/contact" class="text-link">
                        "Check Eligibility "<span class="arrow">"→"</span>
                    </a>
                </Reveal>
                <Reveal class="zoom-in figure">
                    <div class="figure-accent"></div>
                    <img
                        src="https://picsum.photos/800/1000?image=10"
                        alt="Academic Ceremony"
                        class="figure-image"
                    />
                </Reveal>
            </div>
        </section>
    }
}
