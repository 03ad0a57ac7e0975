// SPDX-License-Identifier: MPL-2.0
//! View rendering for the showcase page.

use super::form::NotificationForm;
use super::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Animations, Severity, Snapshot, Toast};
use iced::widget::{button, checkbox, text, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub form: &'a NotificationForm,
    pub snapshot: &'a Snapshot,
    pub animations: &'a Animations,
    pub form_error: Option<&'a str>,
    pub last_action: Option<&'a str>,
}

/// Renders the showcase page with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Container::new(view_controls(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL);

    let overlay = Toast::view_overlay(ctx.snapshot, ctx.animations).map(Message::Toast);

    Stack::new()
        .push(page)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (form, snapshot) = (ctx.form, ctx.snapshot);
    let heading = Text::new("Toast notifications").size(typography::TITLE_LG);

    let fields = Column::new()
        .spacing(spacing::XS)
        .push(labeled(
            "Title",
            text_input("Notification title", &form.title)
                .on_input(Message::TitleChanged)
                .padding(spacing::XS),
        ))
        .push(labeled(
            "Description",
            text_input("Optional description", &form.description)
                .on_input(Message::DescriptionChanged)
                .padding(spacing::XS),
        ))
        .push(labeled(
            "Duration (ms)",
            text_input("Default; 0 keeps it until dismissed", &form.duration_ms)
                .on_input(Message::DurationChanged)
                .padding(spacing::XS),
        ))
        .push(labeled(
            "Action",
            text_input("Optional action label, e.g. Undo", &form.action)
                .on_input(Message::ActionChanged)
                .padding(spacing::XS),
        ))
        .push(
            checkbox(form.dismissible)
                .label("Dismissible")
                .on_toggle(Message::DismissibleToggled),
        );

    let severity_buttons = Severity::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, severity| {
            row.push(
                button(Text::new(capitalized(severity.as_str())))
                    .on_press(Message::Notify(*severity))
                    .padding([6, 12]),
            )
        },
    );

    let clear_button = button(Text::new("Clear all"))
        .on_press_maybe((!snapshot.is_empty()).then_some(Message::ClearAll))
        .padding([6, 12]);

    let status = Text::new(format!(
        "{} active · revision {}",
        snapshot.len(),
        snapshot.revision()
    ))
    .size(typography::CAPTION);

    let mut controls = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::SHOWCASE_WIDTH)
        .push(heading)
        .push(fields)
        .push(severity_buttons)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(clear_button)
                .push(status),
        );

    if let Some(action) = ctx.last_action {
        controls = controls.push(
            Text::new(format!("Last action: {action}")).size(typography::BODY_SM),
        );
    }

    if let Some(error) = ctx.form_error {
        controls = controls.push(Text::new(error).size(typography::BODY_SM).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            },
        ));
    }

    controls.into()
}

fn labeled<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
