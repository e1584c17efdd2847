use super::{ErrorNotice, Reveal};
use leptos::prelude::*;
use nova_core::load::LoadState;
use nova_core::routing::{ANCHOR_ACADEMIC, ANCHOR_SKILLS};
use nova_core::types::Program;

/// In-page anchor for a program card. Programs are listed Academic first.
fn anchor_for(index: usize) -> &'static str {
    if index == 0 { ANCHOR_ACADEMIC } else { ANCHOR_SKILLS }
}

/// Strip of program cards between the mission and the long-form sections.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn ProgramHighlights(programs: LoadState<Vec<Program>>) -> impl IntoView {
    match programs {
        LoadState::Pending => view! {}.into_any(),
        LoadState::Failed(error) => view! {
            <section class="program-highlights">
                <div class="container">
                    <ErrorNotice error=error />
                </div>
            </section>
        }
        .into_any(),
        LoadState::Ready(programs) => view! {
            <section class="program-highlights">
                <div class="container program-grid">
                    {programs.into_iter().enumerate().map(|(idx, program)| {
                        let href = format!("#/#{}", anchor_for(idx));
                        view! {
                            <Reveal class="program-card">
                                <h3 class="program-title">{program.title}</h3>
                                <p class="program-description">{program.description}</p>
                                <ul class="program-features">
                                    {program.features.into_iter().map(|feature| view! {
                                        <li>{feature}</li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                                <a href=href class="text-link">"Learn more →"</a>
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </section>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use nova_core::catalog;
    use nova_core::{Operation, ServiceError};

    #[test]
    fn pending_programs_render_nothing() {
        let html = view! { <ProgramHighlights programs=LoadState::Pending /> }.to_html();
        assert!(!html.contains("program-highlights"));
    }

    #[test]
    fn ready_programs_link_to_their_sections() {
        let programs = LoadState::Ready(catalog::programs());
        let html = view! { <ProgramHighlights programs=programs /> }.to_html();

        assert!(html.contains("Academic Recognition"));
        assert!(html.contains("Executive Presence"));
        assert!(html.contains("href=\"#/#academic\""));
        assert!(html.contains("href=\"#/#skills\""));
    }

    #[test]
    fn failed_programs_show_a_notice() {
        let programs = LoadState::Failed(ServiceError::ServiceUnavailable {
            operation: Operation::FetchPrograms,
            reason: "down".into(),
        });
        let html = view! { <ProgramHighlights programs=programs /> }.to_html();
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("could not reach our servers"));
    }
}
