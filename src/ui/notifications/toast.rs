// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of queue entries, appearing as small
//! cards with severity-colored accents and an optional dismiss button.
//! [`Animations`] sequences the short entrance and exit phases and reports a
//! dismissed toast exactly once, after its exit phase has played.

use super::notification::{NotificationEntry, NotificationId, Severity};
use super::queue::Snapshot;
use crate::app::config::{DEFAULT_TOAST_ENTER_DELAY_MS, DEFAULT_TOAST_EXIT_DELAY_MS};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Messages emitted by toasts.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user clicked the dismiss button of a toast.
    Dismiss(NotificationId),
    /// The user clicked the action button of a toast.
    Action(NotificationId),
}

/// Animation stage of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

impl Phase {
    /// Opacity applied to the toast content in this phase.
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Phase::Entering => opacity::TRANSPARENT,
            Phase::Visible => opacity::OPAQUE,
            Phase::Leaving => opacity::OVERLAY_MEDIUM,
        }
    }
}

/// Delays for the entrance and exit phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub enter_delay: Duration,
    pub exit_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(DEFAULT_TOAST_ENTER_DELAY_MS),
            exit_delay: Duration::from_millis(DEFAULT_TOAST_EXIT_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tracked {
    phase: Phase,
    since: Instant,
}

/// Per-toast phase tracking, kept in sync with the queue snapshot.
#[derive(Debug, Default)]
pub struct Animations {
    timings: Timings,
    tracked: HashMap<NotificationId, Tracked>,
}

impl Animations {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            tracked: HashMap::new(),
        }
    }

    /// Starts tracking new entries and forgets entries that left the queue.
    pub fn sync(&mut self, snapshot: &Snapshot, now: Instant) {
        self.tracked
            .retain(|id, _| snapshot.iter().any(|entry| entry.id() == *id));
        for entry in snapshot.iter() {
            self.tracked.entry(entry.id()).or_insert(Tracked {
                phase: Phase::Entering,
                since: now,
            });
        }
    }

    /// Current phase of `id`; untracked toasts are still entering.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.tracked
            .get(&id)
            .map_or(Phase::Entering, |tracked| tracked.phase)
    }

    /// Starts the exit phase of a dismissible toast.
    ///
    /// Returns `false` if the toast is not dismissible, unknown, or already
    /// leaving, so repeated clicks cannot dismiss twice.
    pub fn begin_dismiss(&mut self, entry: &NotificationEntry, now: Instant) -> bool {
        if !entry.is_dismissible() {
            return false;
        }
        match self.tracked.get_mut(&entry.id()) {
            Some(tracked) if tracked.phase != Phase::Leaving => {
                *tracked = Tracked {
                    phase: Phase::Leaving,
                    since: now,
                };
                true
            }
            _ => false,
        }
    }

    /// Advances phases and returns the toasts whose exit phase has finished.
    ///
    /// A returned id is no longer tracked, so it is reported only once.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut finished = Vec::new();
        for (id, tracked) in &mut self.tracked {
            let elapsed = now.saturating_duration_since(tracked.since);
            match tracked.phase {
                Phase::Entering if elapsed >= self.timings.enter_delay => {
                    tracked.phase = Phase::Visible;
                    tracked.since = now;
                }
                Phase::Leaving if elapsed >= self.timings.exit_delay => finished.push(*id),
                _ => {}
            }
        }
        for id in &finished {
            self.tracked.remove(id);
        }
        finished.sort_unstable();
        finished
    }

    /// Whether any toast is mid-transition and needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tracked
            .values()
            .any(|tracked| tracked.phase != Phase::Visible)
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(entry: &NotificationEntry, phase: Phase) -> Element<'_, Message> {
        let severity = entry.severity();
        let alpha = phase.opacity();
        let accent_color = Color {
            a: alpha,
            ..severity.color()
        };

        let icon_widget = Text::new(Self::severity_icon(severity))
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = entry.title() {
            body = body.push(Text::new(title).size(typography::BODY_LG).style(
                move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, alpha)),
                },
            ));
        }
        if let Some(description) = entry.description() {
            body = body.push(Text::new(description).size(typography::BODY_SM).style(
                move |theme: &Theme| text::Style {
                    color: Some(faded(theme.extended_palette().background.weak.text, alpha)),
                },
            ));
        }

        // Layout: [icon] [title/description] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(label) = entry.action() {
            content = content.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press_maybe(Self::action_press(entry, phase))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| action_button_style(theme, status, accent_color)),
            );
        }

        if entry.is_dismissible() {
            let on_press = (phase != Phase::Leaving).then_some(Message::Dismiss(entry.id()));
            content = content.push(
                button(Text::new("×").size(typography::BODY_LG))
                    .on_press_maybe(on_press)
                    .padding(spacing::XXS)
                    .style(dismiss_button_style),
            );
        }

        // Toast container with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with every entry of `snapshot`, in order.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(
        snapshot: &'a Snapshot,
        animations: &'a Animations,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = snapshot
            .iter()
            .map(|entry| Self::view(entry, animations.phase(entry.id())))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Message sent by the action button; `None` once the toast is leaving.
    fn action_press(entry: &NotificationEntry, phase: Phase) -> Option<Message> {
        entry
            .action()
            .filter(|_| phase != Phase::Leaving)
            .map(|_| Message::Action(entry.id()))
    }

    fn severity_icon(severity: Severity) -> &'static str {
        severity.glyph()
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * accent_color.a,
            ..bg_color
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button: accent outline, filled on hover.
fn action_button_style(theme: &Theme, status: button::Status, accent_color: Color) -> button::Style {
    let text_color = theme.palette().text;
    let fill = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha * accent_color.a,
            ..accent_color
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => fill(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => fill(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
