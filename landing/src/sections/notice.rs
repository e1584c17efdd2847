use leptos::prelude::*;
use nova_core::ServiceError;

/// Inline failure message for a section whose data did not arrive.
#[component]
pub fn ErrorNotice(error: ServiceError) -> impl IntoView {
    let tone = if error.is_transient() {
        "notice notice-retry"
    } else {
        "notice notice-invalid"
    };
    view! {
        <div class=tone role="alert">
            <p>{error.user_message()}</p>
        </div>
    }
}
