//! The sleep seam the data service waits through.
//!
//! The service never calls a runtime directly. Native code and tests use
//! [`TokioTimer`]; the browser build plugs in a `setTimeout` timer.

use std::future::Future;
use std::time::Duration;

/// Something that can wait for a duration without blocking.
pub trait Timer {
    /// Resolve after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Timer backed by `tokio::time::sleep`. Respects paused test time.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_waits_the_full_duration() {
        let start = Instant::now();
        TokioTimer.sleep(Duration::from_millis(250)).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
