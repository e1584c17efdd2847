use crate::browser;
use leptos::html::Div;
use leptos::prelude::*;

/// Wrapper that fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Stagger, for grids
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();

    Effect::new(move || {
        if let Some(element) = node.get() {
            browser::reveal_on_scroll(&element);
        }
    });

    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div node_ref=node class=class style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
