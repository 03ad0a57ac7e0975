// SPDX-License-Identifier: MPL-2.0
//! Input state of the showcase form.

use crate::ui::notifications::NotificationOptions;

/// Fields the user fills in before firing a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationForm {
    pub title: String,
    pub description: String,
    /// Raw duration input in milliseconds; empty means "queue default".
    pub duration_ms: String,
    pub dismissible: bool,
    /// Action button label; empty means no action button.
    pub action: String,
}

impl Default for NotificationForm {
    fn default() -> Self {
        Self {
            title: String::from("Changes saved"),
            description: String::new(),
            duration_ms: String::new(),
            dismissible: true,
            action: String::new(),
        }
    }
}

impl NotificationForm {
    /// Title to use; falls back to `fallback` when the field is blank.
    #[must_use]
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let title = self.title.trim();
        if title.is_empty() {
            fallback
        } else {
            title
        }
    }

    /// Converts the optional fields to queue options.
    ///
    /// Only a non-numeric duration is rejected here; range checks are left to
    /// the queue so that they surface as validation errors.
    pub fn options(&self) -> Result<NotificationOptions, String> {
        let mut options = NotificationOptions::new().dismissible(self.dismissible);

        let description = self.description.trim();
        if !description.is_empty() {
            options = options.description(description);
        }

        let action = self.action.trim();
        if !action.is_empty() {
            options = options.action(action);
        }

        let duration = self.duration_ms.trim();
        if !duration.is_empty() {
            let ms = duration
                .parse::<i64>()
                .map_err(|_| format!("\"{duration}\" is not a number of milliseconds"))?;
            options = options.duration_ms(ms);
        }

        Ok(options)
    }
}
