// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use crate::ui::notifications::Snapshot;
use iced::futures::{SinkExt, Stream};
use iced::{stream, time, Subscription};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

/// Creates a periodic tick subscription for toast entrance and exit phases.
///
/// Only runs while a toast is mid-transition; queue changes arrive through
/// [`queue_updates`] instead.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

static NEXT_FEED_ID: AtomicU64 = AtomicU64::new(1);

/// Receiving end of the queue observer, handed to the runtime once.
///
/// Identity (and so the subscription's identity) is the feed id alone.
#[derive(Debug, Clone)]
pub struct QueueFeed {
    id: u64,
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<Snapshot>>>>,
}

impl QueueFeed {
    /// Creates a feed and the sender a queue observer pushes snapshots into.
    pub fn new() -> (Self, mpsc::UnboundedSender<Snapshot>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let feed = Self {
            id: NEXT_FEED_ID.fetch_add(1, Ordering::Relaxed),
            receiver: Arc::new(Mutex::new(Some(receiver))),
        };
        (feed, sender)
    }

    pub(crate) fn take(&self) -> Option<mpsc::UnboundedReceiver<Snapshot>> {
        self.receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Hash for QueueFeed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Forwards every queue snapshot as `Message::QueueChanged`.
pub fn queue_updates(feed: &QueueFeed) -> Subscription<Message> {
    Subscription::run_with(feed.clone(), feed_stream)
}

fn feed_stream(feed: &QueueFeed) -> impl Stream<Item = Message> {
    let receiver = feed.take();
    stream::channel(16, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
        let Some(mut receiver) = receiver else {
            return;
        };
        while let Some(snapshot) = receiver.recv().await {
            if output.send(Message::QueueChanged(snapshot)).await.is_err() {
                break;
            }
        }
    })
}
