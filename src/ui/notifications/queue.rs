// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle management.
//!
//! The `NotificationQueue` owns the ordered list of active notifications,
//! issues identifiers and runs one auto-dismiss timer per timed entry. It is
//! the scope owner: dropping it aborts every pending timer and disconnects all
//! [`QueueHandle`]s handed out to collaborators.
//!
//! Every mutation takes the state lock once, so mutations never interleave.
//! Observers are notified synchronously after the lock is released and before
//! the mutator returns.

use super::notification::{
    default_duration, IdGenerator, NotificationEntry, NotificationId, NotificationOptions,
    NotificationSpec, Severity,
};
use super::observer::{ObserverId, Observers};
use super::timer::ScheduledRemoval;
use crate::error::{Result, UsageError};
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;

/// Queue-wide defaults applied to incoming specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSettings {
    /// Delay used when a spec leaves `duration_ms` unset. `None` disables auto-dismiss.
    pub default_duration: Option<Duration>,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            default_duration: Some(default_duration()),
        }
    }
}

/// Immutable, ordered view of the queue at one point in time.
///
/// Cloning is cheap. `revision` increases with every state change, which lets
/// observers on different threads discard snapshots that arrive late.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    entries: Arc<[NotificationEntry]>,
    revision: u64,
}

impl Snapshot {
    fn empty() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
            revision: 0,
        }
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn entries(&self) -> &[NotificationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.entries.iter().map(NotificationEntry::id).collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

impl Deref for Snapshot {
    type Target = [NotificationEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

#[derive(Debug)]
struct Slot {
    entry: NotificationEntry,
    removal: Option<ScheduledRemoval>,
}

#[derive(Debug)]
struct State {
    slots: Vec<Slot>,
    ids: IdGenerator,
    snapshot: Snapshot,
    closed: bool,
}

impl State {
    /// Rebuilds the cached snapshot after a change and returns it.
    fn publish(&mut self) -> Snapshot {
        let entries: Vec<NotificationEntry> =
            self.slots.iter().map(|slot| slot.entry.clone()).collect();
        self.snapshot = Snapshot {
            entries: Arc::from(entries),
            revision: self.snapshot.revision + 1,
        };
        self.snapshot.clone()
    }

    fn take(&mut self, id: NotificationId) -> Option<Slot> {
        let pos = self.slots.iter().position(|slot| slot.entry.id() == id)?;
        Some(self.slots.remove(pos))
    }
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    observers: Mutex<Observers>,
    runtime: Handle,
    settings: QueueSettings,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn observers(&self) -> MutexGuard<'_, Observers> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_closed(&self) -> bool {
        self.state().closed
    }

    fn add(self: &Arc<Self>, spec: NotificationSpec) -> Result<NotificationId> {
        let duration = spec
            .resolve_duration(self.settings.default_duration)
            .inspect_err(|err| tracing::warn!(%err, "rejected notification"))?;

        let (id, snapshot) = {
            let mut state = self.state();
            if state.closed {
                return Err(UsageError::ScopeEnded.into());
            }

            let id = state.ids.next_id();
            let removal = duration.map(|delay| {
                let queue = Arc::downgrade(self);
                ScheduledRemoval::spawn(&self.runtime, id, delay, move |id| {
                    if let Some(queue) = queue.upgrade() {
                        queue.expire(id);
                    }
                })
            });

            tracing::debug!(
                %id,
                severity = %spec.severity,
                duration = ?duration,
                "notification added"
            );
            state.slots.push(Slot {
                entry: spec.into_entry(id, duration),
                removal,
            });
            (id, state.publish())
        };

        self.notify(&snapshot);
        Ok(id)
    }

    fn remove(&self, id: NotificationId) -> bool {
        let snapshot = {
            let mut state = self.state();
            let Some(slot) = state.take(id) else {
                return false;
            };
            if let Some(removal) = slot.removal {
                removal.cancel();
            }
            tracing::debug!(%id, "notification removed");
            state.publish()
        };

        self.notify(&snapshot);
        true
    }

    /// Timer path. The removal handle belongs to the task running this, so it
    /// is released rather than aborted.
    fn expire(&self, id: NotificationId) {
        let snapshot = {
            let mut state = self.state();
            if state.take(id).is_none() {
                return;
            }
            tracing::debug!(%id, "notification expired");
            state.publish()
        };

        self.notify(&snapshot);
    }

    fn clear(&self) {
        let snapshot = {
            let mut state = self.state();
            if state.slots.is_empty() {
                return;
            }
            let cleared = state.slots.len();
            for slot in state.slots.drain(..) {
                if let Some(removal) = slot.removal {
                    removal.cancel();
                }
            }
            tracing::debug!(cleared, "notifications cleared");
            state.publish()
        };

        self.notify(&snapshot);
    }

    /// Ends the scope: cancels every timer and drops all observers.
    fn close(&self) {
        {
            let mut state = self.state();
            state.closed = true;
            for slot in state.slots.drain(..) {
                if let Some(removal) = slot.removal {
                    removal.cancel();
                }
            }
            state.publish();
        }
        self.observers().clear();
        tracing::debug!("notification queue closed");
    }

    fn snapshot(&self) -> Snapshot {
        self.state().snapshot.clone()
    }

    fn remaining(&self, id: NotificationId) -> Option<Duration> {
        self.state()
            .slots
            .iter()
            .find(|slot| slot.entry.id() == id)
            .and_then(|slot| slot.removal.as_ref())
            .map(ScheduledRemoval::remaining)
    }

    fn pending_timers(&self) -> usize {
        self.state()
            .slots
            .iter()
            .filter(|slot| slot.removal.is_some())
            .count()
    }

    fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.observers().insert(observer)
    }

    fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers().remove(id)
    }

    fn notify(&self, snapshot: &Snapshot) {
        let callbacks = self.observers().collect();
        for callback in callbacks {
            callback(snapshot);
        }
    }
}

/// Owner of the notification list.
///
/// Construct it once where the notification scope begins and pass
/// [`handle`](Self::handle)s to the components that enqueue or observe
/// notifications.
#[derive(Debug)]
pub struct NotificationQueue {
    shared: Arc<Shared>,
}

impl NotificationQueue {
    /// Creates a queue whose timers run on the current tokio runtime.
    ///
    /// Fails with [`UsageError::NoRuntime`] outside of a runtime context.
    pub fn new(settings: QueueSettings) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| UsageError::NoRuntime)?;
        Ok(Self::with_runtime(runtime, settings))
    }

    /// Creates a queue whose timers run on `runtime`.
    #[must_use]
    pub fn with_runtime(runtime: Handle, settings: QueueSettings) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    slots: Vec::new(),
                    ids: IdGenerator::new(),
                    snapshot: Snapshot::empty(),
                    closed: false,
                }),
                observers: Mutex::new(Observers::default()),
                runtime,
                settings,
            }),
        }
    }

    /// Returns a reference that can be handed to other components.
    #[must_use]
    pub fn handle(&self) -> QueueHandle {
        QueueHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn settings(&self) -> QueueSettings {
        self.shared.settings
    }

    /// Appends a notification and schedules its auto-dismiss.
    ///
    /// A rejected spec leaves the queue untouched and notifies nobody.
    pub fn add(&self, spec: NotificationSpec) -> Result<NotificationId> {
        self.shared.add(spec)
    }

    pub fn notify_success(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Success, message).with_options(options))
    }

    pub fn notify_error(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Error, message).with_options(options))
    }

    pub fn notify_warning(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Warning, message).with_options(options))
    }

    pub fn notify_info(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Info, message).with_options(options))
    }

    pub fn notify_default(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Default, message).with_options(options))
    }

    /// Removes the entry with `id` and cancels its timer.
    ///
    /// Returns `false` if the entry was already gone; that is not an error,
    /// since the timer and the user may race to remove the same entry.
    pub fn remove(&self, id: NotificationId) -> bool {
        self.shared.remove(id)
    }

    /// Removes every entry and cancels every pending timer.
    pub fn clear(&self) {
        self.shared.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.shared.snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state().slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<NotificationEntry> {
        self.snapshot().get(id).cloned()
    }

    /// Time left before `id` is auto-dismissed; `None` for persistent or absent entries.
    #[must_use]
    pub fn remaining(&self, id: NotificationId) -> Option<Duration> {
        self.shared.remaining(id)
    }

    /// Number of scheduled removals still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.shared.pending_timers()
    }

    /// Registers `observer`, called with the new snapshot after every change.
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.shared.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.shared.unsubscribe(id)
    }
}

impl Drop for NotificationQueue {
    fn drop(&mut self) {
        self.shared.close();
    }
}

/// Non-owning reference to a [`NotificationQueue`].
///
/// Every call fails with [`UsageError::ScopeEnded`] once the queue is dropped.
#[derive(Debug, Clone)]
pub struct QueueHandle {
    shared: Weak<Shared>,
}

impl QueueHandle {
    fn shared(&self) -> Result<Arc<Shared>> {
        match self.shared.upgrade() {
            Some(shared) if !shared.is_closed() => Ok(shared),
            _ => Err(UsageError::ScopeEnded.into()),
        }
    }

    /// Whether the owning queue is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.shared().is_ok()
    }

    pub fn add(&self, spec: NotificationSpec) -> Result<NotificationId> {
        self.shared()?.add(spec)
    }

    pub fn notify_success(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Success, message).with_options(options))
    }

    pub fn notify_error(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Error, message).with_options(options))
    }

    pub fn notify_warning(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Warning, message).with_options(options))
    }

    pub fn notify_info(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Info, message).with_options(options))
    }

    pub fn notify_default(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationId> {
        self.add(NotificationSpec::titled(Severity::Default, message).with_options(options))
    }

    pub fn remove(&self, id: NotificationId) -> Result<bool> {
        Ok(self.shared()?.remove(id))
    }

    pub fn clear(&self) -> Result<()> {
        self.shared()?.clear();
        Ok(())
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.shared()?.snapshot())
    }

    pub fn subscribe<F>(&self, observer: F) -> Result<ObserverId>
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        Ok(self.shared()?.subscribe(observer))
    }

    pub fn unsubscribe(&self, id: ObserverId) -> Result<bool> {
        Ok(self.shared()?.unsubscribe(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn queue() -> NotificationQueue {
        NotificationQueue::new(QueueSettings::default()).expect("runtime available")
    }

    async fn advance_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn new_queue_is_empty() {
        let queue = queue();
        assert!(queue.is_empty());
        assert_eq!(queue.snapshot().revision(), 0);
        assert_eq!(queue.pending_timers(), 0);
    }

    #[test]
    fn new_outside_runtime_is_a_usage_error() {
        let err = NotificationQueue::new(QueueSettings::default()).unwrap_err();
        assert_eq!(err, Error::Usage(UsageError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn ids_are_pairwise_distinct() {
        let queue = queue();
        let ids: Vec<_> = (0..50)
            .map(|i| queue.notify_info(format!("n{i}"), NotificationOptions::new()).unwrap())
            .collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test(start_paused = true)]
    async fn entries_keep_insertion_order() {
        let queue = queue();
        let a = queue.notify_success("a", NotificationOptions::new()).unwrap();
        let b = queue.notify_error("b", NotificationOptions::new()).unwrap();
        let c = queue.notify_warning("c", NotificationOptions::new()).unwrap();

        queue.remove(b);
        assert_eq!(queue.snapshot().ids(), vec![a, c]);
    }

    #[tokio::test(start_paused = true)]
    async fn shortcuts_fix_severity_and_title() {
        let queue = queue();
        let id = queue
            .notify_warning(
                "Disk almost full",
                NotificationOptions::new()
                    .description("2% left")
                    .dismissible(false),
            )
            .unwrap();

        let entry = queue.get(id).unwrap();
        assert_eq!(entry.severity(), Severity::Warning);
        assert_eq!(entry.title(), Some("Disk almost full"));
        assert_eq!(entry.description(), Some("2% left"));
        assert!(!entry.is_dismissible());
        assert_eq!(entry.duration(), Some(Duration::from_millis(5000)));
    }

    #[tokio::test(start_paused = true)]
    async fn remove_right_after_add_empties_queue() {
        let queue = queue();
        let timed = queue.notify_info("timed", NotificationOptions::new()).unwrap();
        let sticky = queue
            .notify_info("sticky", NotificationOptions::new().persistent())
            .unwrap();

        assert!(queue.remove(timed));
        assert!(queue.remove(sticky));
        assert!(queue.is_empty());
        assert_eq!(queue.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn removing_twice_is_a_noop() {
        let queue = queue();
        let id = queue.notify_default("x", NotificationOptions::new()).unwrap();

        assert!(queue.remove(id));
        let revision = queue.snapshot().revision();
        assert!(!queue.remove(id));
        assert!(queue.is_empty());
        assert_eq!(queue.snapshot().revision(), revision);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_entry_expires_exactly_at_its_duration() {
        let queue = queue();
        queue
            .add(NotificationSpec::titled(Severity::Success, "Saved").duration_ms(5000))
            .unwrap();
        assert_eq!(queue.len(), 1);

        advance_ms(4999).await;
        assert_eq!(queue.len(), 1);

        advance_ms(2).await;
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_entry_is_never_auto_removed() {
        let queue = queue();
        let id = queue
            .add(NotificationSpec::titled(Severity::Error, "Failed").persistent())
            .unwrap();

        advance_ms(60 * 60 * 1000).await;
        assert!(queue.contains(id));
        assert_eq!(queue.remaining(id), None);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_remove_cancels_the_timer() {
        let queue = queue();
        let id = queue
            .add(NotificationSpec::new(Severity::Info).duration_ms(100))
            .unwrap();
        assert_eq!(queue.pending_timers(), 1);

        let changes = Arc::new(AtomicUsize::new(0));
        {
            let changes = Arc::clone(&changes);
            queue.subscribe(move |_| {
                changes.fetch_add(1, Ordering::SeqCst);
            });
        }

        queue.remove(id);
        advance_ms(500).await;
        // Only the explicit removal reached the observers.
        assert_eq!(changes.load(Ordering::SeqCst), 1);
        assert_eq!(queue.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_empties_queue_and_silences_stale_timers() {
        let queue = queue();
        for ms in [100, 200, 300] {
            queue
                .add(NotificationSpec::new(Severity::Info).duration_ms(ms))
                .unwrap();
        }
        queue.clear();
        let revision = queue.snapshot().revision();
        assert!(queue.is_empty());
        assert_eq!(queue.pending_timers(), 0);

        let later = queue
            .add(NotificationSpec::new(Severity::Info).persistent())
            .unwrap();
        advance_ms(1000).await;

        assert_eq!(queue.snapshot().ids(), vec![later]);
        assert_eq!(queue.snapshot().revision(), revision + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_on_empty_queue_notifies_nobody() {
        let queue = queue();
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = Arc::clone(&calls);
            queue.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }
        queue.clear();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn negative_duration_is_rejected_without_side_effects() {
        let queue = queue();
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = Arc::clone(&calls);
            queue.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        let err = queue
            .notify_error("boom", NotificationOptions::new().duration_ms(-5))
            .unwrap_err();

        assert_eq!(err, Error::Validation(ValidationError::NegativeDuration(-5)));
        assert!(queue.is_empty());
        assert_eq!(queue.snapshot().revision(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn observers_see_each_change_before_the_call_returns() {
        let queue = queue();
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            queue.subscribe(move |snapshot| {
                seen.lock().unwrap().push((snapshot.revision(), snapshot.len()));
            });
        }

        let id = queue.notify_info("a", NotificationOptions::new()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![(1, 1)]);

        queue.notify_info("b", NotificationOptions::new()).unwrap();
        queue.remove(id);
        assert_eq!(*seen.lock().unwrap(), vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_expiry_notifies_observers() {
        let queue = queue();
        queue
            .add(NotificationSpec::new(Severity::Info).duration_ms(10))
            .unwrap();
        let last_len = Arc::new(AtomicUsize::new(usize::MAX));
        {
            let last_len = Arc::clone(&last_len);
            queue.subscribe(move |snapshot| {
                last_len.store(snapshot.len(), Ordering::SeqCst);
            });
        }

        advance_ms(20).await;
        assert_eq!(last_len.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn observer_may_mutate_the_queue() {
        let queue = queue();
        let handle = queue.handle();
        queue.subscribe(move |snapshot| {
            if snapshot.len() > 2 {
                if let Some(first) = snapshot.first() {
                    let _ = handle.remove(first.id());
                }
            }
        });

        for i in 0..5 {
            queue.notify_info(format!("n{i}"), NotificationOptions::new()).unwrap();
        }
        assert_eq!(queue.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unsubscribed_observer_is_not_called() {
        let queue = queue();
        let calls = Arc::new(AtomicUsize::new(0));
        let id = {
            let calls = Arc::clone(&calls);
            queue.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        assert!(queue.unsubscribe(id));
        queue.notify_info("a", NotificationOptions::new()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn configured_default_duration_applies_to_unset_specs() {
        let queue = NotificationQueue::new(QueueSettings {
            default_duration: None,
        })
        .unwrap();
        let id = queue.notify_info("sticky", NotificationOptions::new()).unwrap();

        advance_ms(10_000).await;
        assert!(queue.contains(id));
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_counts_down() {
        let queue = queue();
        let id = queue
            .add(NotificationSpec::new(Severity::Info).duration_ms(1000))
            .unwrap();

        advance_ms(400).await;
        assert_eq!(queue.remaining(id), Some(Duration::from_millis(600)));
    }

    #[tokio::test(start_paused = true)]
    async fn handle_fails_after_queue_is_dropped() {
        let queue = queue();
        let handle = queue.handle();
        assert!(handle.is_connected());
        let id = handle.notify_success("ok", NotificationOptions::new()).unwrap();

        drop(queue);

        assert!(!handle.is_connected());
        assert_eq!(
            handle.snapshot().unwrap_err(),
            Error::Usage(UsageError::ScopeEnded)
        );
        assert!(handle.remove(id).unwrap_err().is_usage());
        assert!(handle.clear().unwrap_err().is_usage());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_queue_aborts_pending_timers() {
        let queue = queue();
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let fired = Arc::clone(&fired);
            queue.subscribe(move |_| {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        queue
            .add(NotificationSpec::new(Severity::Info).duration_ms(50))
            .unwrap();
        let after_add = fired.load(Ordering::SeqCst);

        drop(queue);
        advance_ms(100).await;
        assert_eq!(fired.load(Ordering::SeqCst), after_add);
    }
}
