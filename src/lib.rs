// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification queue with an Iced front end.
//!
//! The queue in [`ui::notifications`] owns an ordered list of transient
//! messages, each with an optional auto-dismiss timer running on tokio.
//! Observers receive immutable snapshots after every change. The [`app`]
//! module hosts a small showcase window that renders those snapshots as
//! toasts.

pub mod app;
pub mod error;
pub mod logging;
pub mod ui;
