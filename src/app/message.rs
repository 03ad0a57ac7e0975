// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{Severity, Snapshot, ToastMessage};
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded from a rendered toast.
    Toast(ToastMessage),
    /// Enqueue a notification with the form contents.
    Notify(Severity),
    /// Remove every notification.
    ClearAll,
    TitleChanged(String),
    DescriptionChanged(String),
    DurationChanged(String),
    DismissibleToggled(bool),
    ActionChanged(String),
    /// Pushed by the queue observer after every change.
    QueueChanged(Snapshot),
    Tick(Instant), // Periodic tick while toasts enter or leave
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override; takes precedence over `settings.toml`.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
