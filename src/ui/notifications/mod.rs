// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `NotificationSpec`/`NotificationEntry` with severity levels
//! - [`queue`] - `NotificationQueue` owning entries, ids and auto-dismiss timers
//! - [`toast`] - Toast widget and its entrance/exit phases
//!
//! # Usage
//!
//! ```no_run
//! use iced_toasts::ui::notifications::{NotificationOptions, NotificationQueue, QueueSettings};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> iced_toasts::error::Result<()> {
//! let queue = NotificationQueue::new(QueueSettings::default())?;
//!
//! // Components receive a handle rather than the queue itself.
//! let handle = queue.handle();
//! handle.notify_success("Image saved", NotificationOptions::new())?;
//!
//! queue.subscribe(|snapshot| println!("{} toasts", snapshot.len()));
//! # Ok(())
//! # }
//! ```

mod notification;
mod observer;
mod queue;
mod timer;
pub mod toast;

pub use notification::{
    default_duration, NotificationEntry, NotificationId, NotificationOptions, NotificationSpec,
    Severity,
};
pub use observer::ObserverId;
pub use queue::{NotificationQueue, QueueHandle, QueueSettings, Snapshot};
pub use toast::{Animations, Message as ToastMessage, Phase, Timings, Toast};
