//! Thin wrappers over the browser APIs the site touches.
//!
//! Off wasm32 (native test builds) there is no `window` to call into, so
//! the location and scroll helpers report the top of the home page and the
//! DOM helpers do nothing.

use nova_core::Timer;
use nova_core::routing::Location;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

/// CSS class a `.reveal` element gets once it has been seen.
pub const VISIBLE_CLASS: &str = "is-visible";

/// `setTimeout`-backed [`Timer`] for the data service.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            });
            if !matches!(scheduled, Some(Ok(_))) {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
}

/// Current fragment route.
pub fn current_location() -> Location {
    if !cfg!(target_arch = "wasm32") {
        return Location::root();
    }
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Location::parse_hash(&hash)
}

/// Vertical scroll offset of the page, 0 when unknown.
pub fn scroll_offset() -> f64 {
    if !cfg!(target_arch = "wasm32") {
        return 0.0;
    }
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll the element with `id` into view.
///
/// Returns `false` when no such element is mounted yet.
pub fn scroll_to_anchor(id: &str) -> bool {
    if !cfg!(target_arch = "wasm32") {
        return false;
    }
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            tracing::debug!(anchor = id, "anchor not mounted yet");
            false
        }
    }
}

thread_local! {
    static REVEAL_OBSERVER: Option<IntersectionObserver> = build_reveal_observer();
}

fn build_reveal_observer() -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.15));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    // Lives as long as the page; one shared observer for every reveal.
    callback.forget();
    Some(observer)
}

/// Fade `element` in the first time it enters the viewport.
///
/// Without IntersectionObserver support the element is shown at once.
pub fn reveal_on_scroll(element: &Element) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    REVEAL_OBSERVER.with(|observer| match observer {
        Some(observer) => observer.observe(element),
        None => {
            let _ = element.class_list().add_1(VISIBLE_CLASS);
        }
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn native_builds_start_at_the_top_of_home() {
        assert_eq!(current_location(), Location::root());
        assert_eq!(scroll_offset(), 0.0);
        assert!(!scroll_to_anchor("skills"));
    }
}
