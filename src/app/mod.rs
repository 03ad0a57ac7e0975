// SPDX-License-Identifier: MPL-2.0
//! Application root state for the toast showcase.
//!
//! The `App` owns the notification queue for the lifetime of the window and
//! translates messages into queue operations. Auto-dismiss timers run on the
//! tokio runtime handed to [`run`]; a queue observer forwards each change to
//! the update loop, and a tick runs only while a toast enters or leaves.

pub mod config;
mod form;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use form::NotificationForm;
pub use message::{Flags, Message};

use crate::ui::notifications::{
    Animations, NotificationOptions, NotificationQueue, QueueSettings, Severity, Snapshot,
    ToastMessage,
};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;
use tokio::runtime::Handle;

const APP_NAME: &str = "Iced Toasts";

/// Root Iced application state.
pub struct App {
    queue: NotificationQueue,
    /// Last snapshot read from the queue; what the view renders.
    snapshot: Snapshot,
    animations: Animations,
    form: NotificationForm,
    form_error: Option<String>,
    feed: subscription::QueueFeed,
    /// Label and toast of the last clicked action button.
    last_action: Option<String>,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.snapshot.len())
            .field("revision", &self.snapshot.revision())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// `runtime` hosts the auto-dismiss timers; it must outlive the window.
pub fn run(flags: Flags, runtime: Handle) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, runtime.clone())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config and establishes the notification queue scope.
    pub fn new(flags: Flags, runtime: Handle) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::from_config(&config, config_warning, flags.theme, runtime);
        (app, Task::none())
    }

    /// Builds the app from an already loaded config.
    ///
    /// A config warning is shown as a persistent warning toast.
    pub fn from_config(
        config: &Config,
        config_warning: Option<String>,
        theme: Option<ThemeMode>,
        runtime: Handle,
    ) -> Self {
        let settings = config
            .notifications
            .queue_settings()
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "invalid notification settings, using defaults");
                QueueSettings::default()
            });
        let queue = NotificationQueue::with_runtime(runtime, settings);
        let (feed, sender) = subscription::QueueFeed::new();
        queue.subscribe(move |snapshot| {
            tracing::trace!(
                revision = snapshot.revision(),
                active = snapshot.len(),
                "notification queue changed"
            );
            // The receiver is gone once the window closes.
            let _ = sender.send(snapshot.clone());
        });

        let theme_mode = theme.unwrap_or(config.general.theme_mode);
        let mut app = App {
            snapshot: queue.snapshot(),
            queue,
            animations: Animations::new(config.notifications.timings()),
            form: NotificationForm::default(),
            form_error: None,
            feed,
            last_action: None,
            theme: theme_mode.theme(),
        };

        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "config fallback");
            if let Err(err) = app.queue.notify_warning(
                "Settings could not be applied",
                NotificationOptions::new().description(warning).persistent(),
            ) {
                tracing::error!(%err, "failed to report config warning");
            }
        }
        app.refresh(Instant::now());
        app
    }

    /// Queue operations are reachable through the app for embedding and tests.
    #[must_use]
    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    fn title(&self) -> String {
        match self.snapshot.len() {
            0 => APP_NAME.to_string(),
            n => format!("({n}) {APP_NAME}"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::queue_updates(&self.feed),
            subscription::create_tick_subscription(self.animations.is_animating()),
        ])
    }

    /// Re-reads the queue, advances toast phases and removes finished exits.
    fn refresh(&mut self, now: Instant) {
        self.snapshot = self.queue.snapshot();
        self.animations.sync(&self.snapshot, now);
        let finished = self.animations.tick(now);
        if !finished.is_empty() {
            for id in finished {
                self.queue.remove(id);
            }
            self.snapshot = self.queue.snapshot();
        }
    }

    fn notify(&mut self, severity: Severity) {
        let options = match self.form.options() {
            Ok(options) => options,
            Err(message) => {
                self.form_error = Some(message);
                return;
            }
        };
        let title = self.form.title_or(severity.as_str()).to_string();

        let result = match severity {
            Severity::Success => self.queue.notify_success(title, options),
            Severity::Error => self.queue.notify_error(title, options),
            Severity::Warning => self.queue.notify_warning(title, options),
            Severity::Info => self.queue.notify_info(title, options),
            Severity::Default => self.queue.notify_default(title, options),
        };

        self.form_error = match result {
            Ok(_) => None,
            Err(err) => Some(err.to_string()),
        };
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(ToastMessage::Dismiss(id)) => {
                if let Some(entry) = self.snapshot.get(id) {
                    self.animations.begin_dismiss(entry, Instant::now());
                }
            }
            Message::Toast(ToastMessage::Action(id)) => {
                if let Some(entry) = self.snapshot.get(id) {
                    if let Some(label) = entry.action() {
                        tracing::info!(%id, action = label, "toast action");
                        self.last_action = Some(format!("{label} ({id})"));
                    }
                    self.animations.begin_dismiss(entry, Instant::now());
                }
            }
            Message::Notify(severity) => self.notify(severity),
            Message::ClearAll => self.queue.clear(),
            Message::TitleChanged(value) => self.form.title = value,
            Message::DescriptionChanged(value) => self.form.description = value,
            Message::DurationChanged(value) => {
                self.form.duration_ms = value;
                self.form_error = None;
            }
            Message::DismissibleToggled(value) => self.form.dismissible = value,
            Message::ActionChanged(value) => self.form.action = value,
            Message::QueueChanged(snapshot) => {
                // Snapshots published while handling a message were already read.
                if snapshot.revision() <= self.snapshot.revision() {
                    return Task::none();
                }
            }
            Message::Tick(now) => {
                self.refresh(now);
                return Task::none();
            }
        }
        self.refresh(Instant::now());
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            form: &self.form,
            snapshot: &self.snapshot,
            animations: &self.animations,
            form_error: self.form_error.as_deref(),
            last_action: self.last_action.as_deref(),
        })
    }
}
