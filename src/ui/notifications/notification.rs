// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the request side (`NotificationSpec`,
//! `NotificationOptions`) and the stored side (`NotificationEntry`) of the
//! notification system, along with `Severity` and `NotificationId`.

use crate::app::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::error::ValidationError;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers are issued by a queue's [`IdGenerator`] and are never reused
/// while that queue exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Returns the raw counter value backing this identifier.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Monotonic identifier source owned by a single queue.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn next_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next);
        self.next += 1;
        id
    }
}

/// Severity level of a notification.
///
/// Purely informational for the queue; the toast view uses it for the
/// accent color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Success,
    Warning,
    #[serde(alias = "destructive")]
    Error,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Default,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Info,
    ];

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Default => palette::GRAY_400,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph shown next to the notification text.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
            Severity::Default | Severity::Info => "ℹ",
        }
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overrides accepted by the severity shortcuts (`success`, `error`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationOptions {
    pub description: Option<String>,
    pub duration_ms: Option<i64>,
    pub dismissible: Option<bool>,
    /// Label of an action button rendered next to the message.
    pub action: Option<String>,
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the auto-dismiss delay in milliseconds. `0` disables auto-dismiss.
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn duration(self, duration: Duration) -> Self {
        self.duration_ms(duration_to_ms(duration))
    }

    /// Keeps the notification until it is removed explicitly.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }
}

/// A request to show a notification.
///
/// Unset fields fall back to the queue defaults when the spec is added:
/// the configured default duration and `dismissible = true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSpec {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Auto-dismiss delay in milliseconds; `0` means "never".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissible: Option<bool>,
    /// Action button label. Clicking it is reported to the view's owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl NotificationSpec {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Spec used by the severity shortcuts: fixed severity, message as title.
    #[must_use]
    pub fn titled(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity).title(message)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn duration(self, duration: Duration) -> Self {
        self.duration_ms(duration_to_ms(duration))
    }

    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Applies the overrides set in `options`; unset options leave the spec as is.
    #[must_use]
    pub fn with_options(mut self, options: NotificationOptions) -> Self {
        if let Some(description) = options.description {
            self.description = Some(description);
        }
        if let Some(duration_ms) = options.duration_ms {
            self.duration_ms = Some(duration_ms);
        }
        if let Some(dismissible) = options.dismissible {
            self.dismissible = Some(dismissible);
        }
        if let Some(action) = options.action {
            self.action = Some(action);
        }
        self
    }

    /// Checks the spec without consuming it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.duration_ms {
            Some(ms) if ms < 0 => Err(ValidationError::NegativeDuration(ms)),
            _ => Ok(()),
        }
    }

    /// Resolves the auto-dismiss delay. `None` means the entry stays until removed.
    pub(crate) fn resolve_duration(
        &self,
        default_duration: Option<Duration>,
    ) -> Result<Option<Duration>, ValidationError> {
        self.validate()?;
        let duration = match self.duration_ms {
            None => default_duration,
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms.unsigned_abs())),
        };
        Ok(duration.filter(|d| !d.is_zero()))
    }

    pub(crate) fn into_entry(
        self,
        id: NotificationId,
        duration: Option<Duration>,
    ) -> NotificationEntry {
        NotificationEntry {
            id,
            severity: self.severity,
            title: self.title,
            description: self.description,
            duration,
            dismissible: self.dismissible.unwrap_or(true),
            action: self.action,
            created_at: Instant::now(),
        }
    }
}

fn duration_to_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// The queue's default auto-dismiss delay when nothing is configured.
#[must_use]
pub fn default_duration() -> Duration {
    Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)
}

/// A notification accepted by a queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEntry {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    description: Option<String>,
    /// `None` when the entry is never auto-dismissed.
    duration: Option<Duration>,
    dismissible: bool,
    action: Option<String>,
    created_at: Instant,
}

impl NotificationEntry {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the auto-dismiss delay, or `None` for persistent entries.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_none()
    }

    /// Whether the view should offer a dismiss control. Does not affect the timer.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Label of the action button, if any.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_increasing() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert!(second > first);
        assert_eq!(first.get(), 1);
    }

    #[test]
    fn id_display_is_prefixed() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id().to_string(), "toast-1");
    }

    #[test]
    fn severity_colors_are_distinct() {
        for (i, a) in Severity::ALL.iter().enumerate() {
            for b in &Severity::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn destructive_is_an_alias_for_error() {
        let spec: NotificationSpec = toml::from_str(r#"severity = "destructive""#).unwrap();
        assert_eq!(spec.severity, Severity::Error);
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let spec: NotificationSpec = toml::from_str(r#"title = "Saved""#).unwrap();
        assert_eq!(spec.severity, Severity::Default);
        assert_eq!(spec.title.as_deref(), Some("Saved"));
        assert_eq!(spec.duration_ms, None);
        assert_eq!(spec.dismissible, None);
    }

    #[test]
    fn unset_duration_uses_queue_default() {
        let spec = NotificationSpec::new(Severity::Info);
        let resolved = spec.resolve_duration(Some(default_duration())).unwrap();
        assert_eq!(resolved, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn zero_duration_disables_auto_dismiss() {
        let spec = NotificationSpec::new(Severity::Info).persistent();
        assert_eq!(spec.resolve_duration(Some(default_duration())).unwrap(), None);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let spec = NotificationSpec::new(Severity::Info).duration_ms(-1);
        assert_eq!(
            spec.resolve_duration(Some(default_duration())),
            Err(ValidationError::NegativeDuration(-1))
        );
    }

    #[test]
    fn options_override_only_what_they_set() {
        let spec = NotificationSpec::titled(Severity::Success, "Saved")
            .description("original")
            .dismissible(false)
            .with_options(NotificationOptions::new().duration_ms(250));

        assert_eq!(spec.title.as_deref(), Some("Saved"));
        assert_eq!(spec.description.as_deref(), Some("original"));
        assert_eq!(spec.duration_ms, Some(250));
        assert_eq!(spec.dismissible, Some(false));
    }

    #[test]
    fn entry_defaults_to_dismissible() {
        let mut ids = IdGenerator::new();
        let entry = NotificationSpec::titled(Severity::Warning, "Low disk")
            .into_entry(ids.next_id(), None);

        assert!(entry.is_dismissible());
        assert!(entry.is_persistent());
        assert_eq!(entry.title(), Some("Low disk"));
        assert_eq!(entry.description(), None);
        assert_eq!(entry.severity(), Severity::Warning);
    }

    #[test]
    fn action_label_flows_from_options_to_entry() {
        let mut ids = IdGenerator::new();
        let entry = NotificationSpec::titled(Severity::Info, "Message archived")
            .with_options(NotificationOptions::new().action("Undo"))
            .into_entry(ids.next_id(), None);

        assert_eq!(entry.action(), Some("Undo"));
    }

    #[test]
    fn action_is_read_from_toml() {
        let spec: NotificationSpec =
            toml::from_str("title = \"Deleted\"\naction = \"Undo\"").unwrap();
        assert_eq!(spec.action.as_deref(), Some("Undo"));
    }
}
