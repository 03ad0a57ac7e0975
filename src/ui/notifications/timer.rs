// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! Each timed entry owns exactly one [`ScheduledRemoval`]. The timer task only
//! holds a weak reference to the queue, and aborting it through the stored
//! handle guarantees it never fires afterwards.

use super::notification::NotificationId;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Cancellation handle for a pending auto-dismiss.
#[derive(Debug)]
pub(crate) struct ScheduledRemoval {
    handle: AbortHandle,
    deadline: Instant,
}

impl ScheduledRemoval {
    /// Spawns a task on `runtime` that calls `on_expire(id)` once `delay` has elapsed.
    pub(crate) fn spawn<F>(
        runtime: &Handle,
        id: NotificationId,
        delay: Duration,
        on_expire: F,
    ) -> Self
    where
        F: FnOnce(NotificationId) + Send + 'static,
    {
        // Entered so the deadline uses the runtime's clock (paused in tests).
        let _guard = runtime.enter();
        let deadline = Instant::now() + delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expire(id);
        });

        Self {
            handle: task.abort_handle(),
            deadline,
        }
    }

    /// Time left before the removal fires.
    pub(crate) fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub(crate) fn cancel(self) {
        self.handle.abort();
    }
}
