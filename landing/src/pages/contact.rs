// Contact page: enquiry form plus office list.
use crate::app::SiteService;
use crate::sections::{ErrorNotice, Reveal};
use crate::tasks::{spawn_scoped, use_task_scope};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use nova_core::ServiceError;
use nova_core::load::LoadState;
use nova_core::types::{ContactSubmission, MetaData, Office, SubmissionReceipt};

/// Where the enquiry form is in its round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Pending,
    Received(SubmissionReceipt),
    Failed(ServiceError),
}

impl FormStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<Result<SubmissionReceipt, ServiceError>> for FormStatus {
    fn from(result: Result<SubmissionReceipt, ServiceError>) -> Self {
        match result {
            Ok(receipt) => Self::Received(receipt),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Collect the form fields. Blank optional fields are left out.
fn build_submission(
    name: String,
    email: String,
    organisation: String,
    message: String,
) -> ContactSubmission {
    let mut submission = ContactSubmission::new()
        .with("name", name)
        .with("email", email)
        .with("message", message);
    if !organisation.trim().is_empty() {
        submission.insert("organisation", organisation);
    }
    submission
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let service = expect_context::<SiteService>();
    let scope = use_task_scope();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let organisation = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let meta = RwSignal::new(LoadState::<MetaData>::Pending);
    {
        let service = service.clone();
        spawn_scoped(
            &scope,
            async move { service.fetch_meta().await },
            move |result| meta.set(result.into()),
        );
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_pending) {
            return;
        }
        let submission = build_submission(
            name.get_untracked(),
            email.get_untracked(),
            organisation.get_untracked(),
            message.get_untracked(),
        );
        status.set(FormStatus::Pending);

        let service = service.clone();
        spawn_scoped(
            &scope,
            async move { service.submit_contact_form(submission).await },
            move |result| {
                if let Ok(receipt) = &result {
                    name.set(String::new());
                    email.set(String::new());
                    organisation.set(String::new());
                    message.set(String::new());
                    tracing::debug!(id = %receipt.id, "enquiry acknowledged");
                }
                status.set(result.into());
            },
        );
    };

    view! {
        <section class="page-header">
            <div class="container">
                <p class="kicker">"Admissions"</p>
                <h1 class="page-title">"Contact Us"</h1>
                <p class="page-description">
                    "Tell us about your goals and an advisor will get back to you."
                </p>
            </div>
        </section>

        <section class="contact">
            <div class="container contact-grid">
                <Reveal class="contact-form-shell">
                    <form class="contact-form" on:submit=on_submit>
                        <label class="field">
                            <span class="field-label">"Full name"</span>
                            <input
                                type="text"
                                name="name"
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Email"</span>
                            <input
                                type="email"
                                name="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Organisation (optional)"</span>
                            <input
                                type="text"
                                name="organisation"
                                prop:value=move || organisation.get()
                                on:input=move |ev| organisation.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Message"</span>
                            <textarea
                                name="message"
                                rows="5"
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || status.with(FormStatus::is_pending)
                        >
                            {move || if status.with(FormStatus::is_pending) { "Sending…" } else { "Send Enquiry" }}
                        </button>
                        {move || view! { <FormFeedback status=status.get() /> }}
                    </form>
                </Reveal>

                <aside class="contact-aside">
                    <h2 class="section-heading small">"Our Offices"</h2>
                    {move || {
                        let offices = meta.with(|meta| {
                            meta.ready().map(|meta| meta.offices.clone()).unwrap_or_default()
                        });
                        view! { <OfficeList offices=offices /> }
                    }}
                    <p class="contact-direct">"admissions@novavista.edu"</p>
                    <p class="contact-direct">"+1 (415) 555-0110"</p>
                </aside>
            </div>
        </section>
    }
}

/// Message under the submit button.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn FormFeedback(status: FormStatus) -> impl IntoView {
    match status {
        FormStatus::Idle => view! {}.into_any(),
        FormStatus::Pending => view! {
            <p class="form-feedback pending">"Sending your enquiry…"</p>
        }
        .into_any(),
        FormStatus::Received(receipt) => view! {
            <div class="form-feedback success" role="status">
                <p>"Thank you. Your enquiry has been received."</p>
                <p class="receipt">"Reference: "<code>{receipt.id}</code></p>
            </div>
        }
        .into_any(),
        FormStatus::Failed(error) => view! { <ErrorNotice error=error /> }.into_any(),
    }
}

#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn OfficeList(offices: Vec<Office>) -> impl IntoView {
    if offices.is_empty() {
        return view! {}.into_any();
    }
    view! {
        <ul class="office-list">
            {offices.into_iter().map(|office| view! {
                <li class="office">
                    <span class="office-city">{office.city}</span>
                    <span class="office-region">{office.region}</span>
                </li>
            }).collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::with_site;
    use leptos::tachys::view::RenderHtml;
    use nova_core::catalog;
    use nova_core::types::SubmissionStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_organisation_is_left_out() {
        let submission = build_submission("A".into(), "a@b.com".into(), "  ".into(), "Hi".into());
        assert_eq!(submission.get("organisation"), None);
        assert_eq!(submission.get("email"), Some("a@b.com"));
        assert_eq!(submission.len(), 3);
    }

    #[test]
    fn filled_organisation_is_sent() {
        let submission = build_submission("A".into(), "a@b.com".into(), "Acme".into(), "".into());
        assert_eq!(submission.get("organisation"), Some("Acme"));
    }

    #[test]
    fn status_follows_the_service_result() {
        let receipt = SubmissionReceipt {
            status: SubmissionStatus::Received,
            id: "k3j9x0a1b".into(),
        };
        assert_eq!(
            FormStatus::from(Ok(receipt.clone())),
            FormStatus::Received(receipt)
        );
        assert!(FormStatus::Pending.is_pending());
        assert!(!FormStatus::Idle.is_pending());
    }

    #[test]
    fn idle_form_shows_no_feedback() {
        let html = view! { <FormFeedback status=FormStatus::Idle /> }.to_html();
        assert!(!html.contains("form-feedback"));
    }

    #[test]
    fn pending_form_says_so() {
        let html = view! { <FormFeedback status=FormStatus::Pending /> }.to_html();
        assert!(html.contains("form-feedback pending"));
    }

    #[test]
    fn receipt_id_is_displayed() {
        let status = FormStatus::Received(SubmissionReceipt {
            status: SubmissionStatus::Received,
            id: "k3j9x0a1b".into(),
        });
        let html = view! { <FormFeedback status=status /> }.to_html();
        assert!(html.contains("k3j9x0a1b"));
        assert!(html.contains("role=\"status\""));
    }

    #[test]
    fn validation_errors_are_displayed() {
        let status = FormStatus::Failed(ServiceError::ValidationFailed {
            field: "email".into(),
            reason: "must look like name@example.com".into(),
        });
        let html = view! { <FormFeedback status=status /> }.to_html();
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("email field"));
    }

    #[test]
    fn office_list_renders_every_office() {
        let html = view! { <OfficeList offices=catalog::meta().offices /> }.to_html();
        assert_eq!(html.matches("class=\"office\"").count(), 3);
        assert!(html.contains("London"));
    }

    #[test]
    fn empty_office_list_renders_nothing() {
        let html = view! { <OfficeList offices=Vec::new() /> }.to_html();
        assert!(!html.contains("office-list"));
    }

    #[test]
    fn contact_page_starts_idle() {
        let html = with_site(|| view! { <ContactPage /> }.to_html());

        for field in ["name", "email", "organisation", "message"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
        assert!(html.contains("Send Enquiry"));
        assert!(!html.contains("Sending"));
        assert!(!html.contains("form-feedback"));
        // offices wait for metadata
        assert!(!html.contains("office-list"));
    }
}
