//! Cancellation groups for view-owned fetches.
//!
//! A view creates a [`TaskScope`], binds every fetch it starts, and cancels
//! the scope when it is torn down. Cancelled fetches resolve to `None` and
//! never reach view state.

use futures::future::{AbortHandle, Abortable};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A group of in-flight futures that can be aborted together.
#[derive(Clone, Debug, Default)]
pub struct TaskScope {
    inner: Arc<Mutex<ScopeInner>>,
}

#[derive(Debug, Default)]
struct ScopeInner {
    cancelled: bool,
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Removes a bound future's handle once that future finishes or is dropped.
struct Binding {
    inner: Arc<Mutex<ScopeInner>>,
    id: Option<u64>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            lock(&self.inner).handles.remove(&id);
        }
    }
}

fn lock(inner: &Mutex<ScopeInner>) -> MutexGuard<'_, ScopeInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TaskScope {
    /// Fresh, live scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tie `future` to this scope.
    ///
    /// Resolves to `Some(output)` if it completes first, `None` if the scope
    /// is cancelled first. Binding to an already cancelled scope yields
    /// `None` on first poll.
    pub fn bind<F>(&self, future: F) -> impl Future<Output = Option<F::Output>> + use<F>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut inner = lock(&self.inner);
            if inner.cancelled {
                handle.abort();
                None
            } else {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.handles.insert(id, handle);
                Some(id)
            }
        };
        let binding = Binding {
            inner: Arc::clone(&self.inner),
            id,
        };
        let abortable = Abortable::new(future, registration);
        async move {
            let _binding = binding;
            abortable.await.ok()
        }
    }

    /// Abort everything bound so far and everything bound later.
    pub fn cancel(&self) {
        let mut inner = lock(&self.inner);
        inner.cancelled = true;
        for (_, handle) in inner.handles.drain() {
            handle.abort();
        }
    }

    /// Has [`TaskScope::cancel`] been called?
    pub fn is_cancelled(&self) -> bool {
        lock(&self.inner).cancelled
    }

    /// Bound futures that have neither finished nor been dropped.
    pub fn in_flight(&self) -> usize {
        lock(&self.inner).handles.len()
    }
}
