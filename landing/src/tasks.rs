//! View-scoped async work.

use leptos::prelude::*;
use nova_core::scope::TaskScope;
use std::future::Future;

/// A [`TaskScope`] cancelled when the calling component is disposed.
pub fn use_task_scope() -> TaskScope {
    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });
    scope
}

/// Run `future` on the local executor and hand its output to `apply`,
/// unless `scope` is cancelled first.
pub fn spawn_scoped<T, F>(scope: &TaskScope, future: F, apply: impl FnOnce(T) + 'static)
where
    F: Future<Output = T> + 'static,
    T: 'static,
{
    let bound = scope.bind(future);
    leptos::task::spawn_local(async move {
        if let Some(value) = bound.await {
            apply(value);
        }
    });
}
