// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the sources, the playlist cursor and the viewport,
//! and translates messages into state changes and follow-up tasks such as
//! folder scans, image loads or config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Keybinding, Message};
pub use subscription::keybinding_for;

use crate::config::{self, Config, STATUS_TICK};
use crate::i18n::fluent::I18n;
use crate::slideshow::{Cursor, Interval, Sources};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sources_panel;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    sources: Sources,
    cursor: Cursor,
    viewer: component::State,
    navbar: navbar::State,
    sources_panel: sources_panel::State,
    sources_panel_visible: bool,
    buttons_visible: bool,
    notifications: notifications::Manager,
    /// Path of the photo currently on screen.
    displayed: Option<PathBuf>,
    scan_generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sources", &self.sources.len())
            .field("files", &self.cursor.len())
            .field("playback", &self.cursor.state())
            .field("displayed", &self.displayed)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes state from the config and CLI flags, and starts the first
    /// scan when sources were given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    /// Builds the app from an already loaded config and its load warning.
    fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let interval = flags
            .interval_ms
            .or(config.slideshow.interval_ms)
            .map_or_else(Interval::default, Interval::new);

        let mut app = App {
            i18n,
            sources: Sources::new(),
            cursor: Cursor::new(interval),
            viewer: component::State::new(),
            navbar: navbar::State::new(interval),
            sources_panel: sources_panel::State::default(),
            sources_panel_visible: config.layout.sources_panel_visible.unwrap_or(true),
            buttons_visible: config.layout.buttons_visible.unwrap_or(true),
            notifications: notifications::Manager::new(),
            displayed: None,
            scan_generation: 0,
            config,
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        for dir in flags.sources {
            if let Err(error) = app.sources.add(dir) {
                log::info!("ignoring command line source: {error}");
            }
        }

        let task = if app.sources.is_empty() {
            Task::none()
        } else {
            update::start_scan(&mut app.context())
        };

        (app, task)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            sources: &mut self.sources,
            cursor: &mut self.cursor,
            viewer: &mut self.viewer,
            navbar: &mut self.navbar,
            sources_panel: &mut self.sources_panel,
            sources_panel_visible: &mut self.sources_panel_visible,
            buttons_visible: &mut self.buttons_visible,
            notifications: &mut self.notifications,
            displayed: &mut self.displayed,
            scan_generation: &mut self.scan_generation,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let file_name = self
            .displayed
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_timer_subscription(self.cursor.timer().armed()),
            subscription::create_tick_subscription(
                self.notifications.has_notifications(),
                STATUS_TICK,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SourcesPanel(panel_message) => {
                update::handle_sources_panel_message(&mut ctx, panel_message)
            }
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::Keybinding(binding) => update::handle_keybinding(&mut ctx, binding),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SourcePicked(picked) => update::handle_source_picked(&mut ctx, picked),
            Message::ScanCompleted {
                generation,
                outcome,
            } => update::handle_scan_completed(&mut ctx, generation, outcome),
            Message::ImageLoaded {
                ticket,
                path,
                result,
            } => update::handle_image_loaded(&mut ctx, ticket, path, result),
            Message::TimerFired(generation) => update::handle_timer_fired(&mut ctx, generation),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navbar: &self.navbar,
            sources: &self.sources,
            sources_panel: self.sources_panel,
            sources_panel_visible: self.sources_panel_visible,
            buttons_visible: self.buttons_visible,
            playback: self.cursor.state(),
            viewer: &self.viewer,
            notifications: &self.notifications,
            displayed: self.displayed.as_deref(),
        })
    }
}
