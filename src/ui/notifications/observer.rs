// SPDX-License-Identifier: MPL-2.0
//! Observer registry for queue changes.
//!
//! Observers are plain callbacks receiving the new [`Snapshot`]. They run on
//! the thread that performed the mutation, after the queue lock has been
//! released, so an observer may call back into the queue.

use super::queue::Snapshot;
use std::sync::Arc;

/// Identifies a registered observer, for [`unsubscribe`](super::NotificationQueue::unsubscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Arc<dyn Fn(&Snapshot) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(ObserverId, Callback)>,
}

impl Observers {
    pub(crate) fn insert<F>(&mut self, callback: F) -> ObserverId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Arc::new(callback)));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(observer, _)| *observer != id);
        self.callbacks.len() != before
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Clones the callback list so it can be invoked without holding a lock.
    pub(crate) fn collect(&self) -> Vec<Callback> {
        self.callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.callbacks.clear();
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
