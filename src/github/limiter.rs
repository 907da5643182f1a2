//! Shared request scheduler enforcing the GitHub API rate allowance.
//!
//! All outbound calls across all concurrently running scoring runs funnel
//! through one scheduler, so the process-wide request rate stays bounded.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{Mutex, Semaphore};
use tokio::time::{Instant, sleep_until};

/// Capacity-gated, spacing-enforced dispatcher for API calls.
///
/// At most `max_in_flight` requests run concurrently, and consecutive
/// dispatches are separated by at least `min_spacing`. Queued work waits
/// indefinitely for a slot; there is no queue timeout and no retry.
pub struct RequestScheduler {
    permits: Semaphore,
    next_dispatch: Mutex<Instant>,
    min_spacing: Duration,
}

impl RequestScheduler {
    /// Create a scheduler with the given concurrency cap and inter-dispatch spacing.
    #[must_use]
    pub fn new(max_in_flight: usize, min_spacing: Duration) -> Self {
        Self {
            permits: Semaphore::new(max_in_flight),
            next_dispatch: Mutex::new(Instant::now()),
            min_spacing,
        }
    }

    /// Run `work` once a concurrency slot and a dispatch window are available.
    ///
    /// The permit is held for the whole call, so slow responses count
    /// against the in-flight cap.
    pub async fn schedule<F, T>(&self, work: F) -> T
    where
        F: Future<Output = T>,
    {
        // Semaphore is never closed; acquire cannot fail.
        let _permit = match self.permits.acquire().await {
            Ok(p) => p,
            Err(_) => unreachable!("scheduler semaphore closed"),
        };

        let slot = {
            let mut next = self.next_dispatch.lock().await;
            let now = Instant::now();
            let slot = if *next > now { *next } else { now };
            *next = slot + self.min_spacing;
            slot
        };
        sleep_until(slot).await;

        work.await
    }
}
