// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the parts of the `App`
//! they may touch, apply the change and return the follow-up `Task`.

use super::{persistence, Keybinding, Message};
use crate::config::Config;
use crate::directory_scanner::{self, ScanOutcome};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::slideshow::{Cursor, Direction, DisplayRequest, LoadTicket, SkipOutcome, Sources};
use crate::ui::controls;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sources_panel::{self, Event as SourcesPanelEvent};
use crate::ui::viewer::component;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub sources: &'a mut Sources,
    pub cursor: &'a mut Cursor,
    pub viewer: &'a mut component::State,
    pub navbar: &'a mut navbar::State,
    pub sources_panel: &'a mut sources_panel::State,
    pub sources_panel_visible: &'a mut bool,
    pub buttons_visible: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
    /// Path of the photo currently on screen.
    pub displayed: &'a mut Option<PathBuf>,
    pub scan_generation: &'a mut u64,
}

// =============================================================================
// Component messages
// =============================================================================

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    let (event, task) = ctx.viewer.handle_message(message);
    if let component::Event::PhotoClicked(point) = event {
        log::info!("photo clicked at ({:.0}, {:.0})", point.x, point.y);
    }
    task.map(Message::Viewer)
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.navbar) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::IntervalChanged(interval) => {
            ctx.cursor.set_interval(interval);
            ctx.config.slideshow.interval_ms = Some(interval.millis());
            persist(ctx);
            Task::none()
        }
        NavbarEvent::IntervalRejected(error) => {
            log::warn!("{error}");
            ctx.notifications
                .push(Notification::warning(error.i18n_key()));
            Task::none()
        }
        NavbarEvent::ToggleButtons => {
            toggle_buttons(ctx);
            Task::none()
        }
        NavbarEvent::Reshuffle => {
            ctx.cursor.reshuffle();
            Task::none()
        }
        NavbarEvent::Reload => start_scan(ctx),
        NavbarEvent::LanguageSelected(locale) => {
            if let Some(notification) =
                persistence::apply_language_change(ctx.i18n, ctx.config, locale)
            {
                ctx.notifications.push(notification);
            }
            Task::none()
        }
    }
}

pub fn handle_sources_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: sources_panel::Message,
) -> Task<Message> {
    match sources_panel::update(message, ctx.sources_panel) {
        SourcesPanelEvent::None => Task::none(),
        SourcesPanelEvent::AddRequested => {
            let title = ctx.i18n.tr("sources-picker-title");
            Task::perform(pick_folder(title), Message::SourcePicked)
        }
        SourcesPanelEvent::RemoveRequested(index) => {
            if ctx.sources.remove(index).is_none() {
                return Task::none();
            }
            ctx.sources_panel.clamp(ctx.sources.len());
            start_scan(ctx)
        }
    }
}

pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::Previous => advance(ctx, Direction::Backward),
        controls::Message::Next => advance(ctx, Direction::Forward),
        controls::Message::PlayPause => {
            let state = ctx.cursor.play_pause();
            log::debug!("playback is now {state:?}");
            Task::none()
        }
    }
}

pub fn handle_keybinding(ctx: &mut UpdateContext<'_>, binding: Keybinding) -> Task<Message> {
    match binding {
        Keybinding::Next => advance(ctx, Direction::Forward),
        Keybinding::Previous => advance(ctx, Direction::Backward),
        Keybinding::PlayPause => handle_controls_message(ctx, controls::Message::PlayPause),
        Keybinding::ToggleSourcesPanel => {
            *ctx.sources_panel_visible = !*ctx.sources_panel_visible;
            ctx.config.layout.sources_panel_visible = Some(*ctx.sources_panel_visible);
            persist(ctx);
            Task::none()
        }
        Keybinding::ToggleButtonsPanel => {
            toggle_buttons(ctx);
            Task::none()
        }
    }
}

// =============================================================================
// Sources and scanning
// =============================================================================

/// Adds a picked folder and rebuilds the file list.
///
/// A duplicate is reported and leaves the sources unchanged, but the list is
/// still rebuilt.
pub fn handle_source_picked(ctx: &mut UpdateContext<'_>, picked: Option<PathBuf>) -> Task<Message> {
    let Some(dir) = picked else {
        return Task::none();
    };

    if let Err(error) = ctx.sources.add(dir) {
        log::info!("{error}");
        ctx.notifications.push(Notification::info(error.i18n_key()));
    }
    start_scan(ctx)
}

/// Rescans every source in the background. Results of older scans are dropped.
pub fn start_scan(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.scan_generation += 1;
    let generation = *ctx.scan_generation;
    let sources = ctx.sources.as_slice().to_vec();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || directory_scanner::scan_sources(&sources))
                .await
                .unwrap_or_else(|error| {
                    log::warn!("scan task failed: {error}");
                    ScanOutcome::default()
                })
        },
        move |outcome| Message::ScanCompleted {
            generation,
            outcome,
        },
    )
}

pub fn handle_scan_completed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    outcome: ScanOutcome,
) -> Task<Message> {
    if generation != *ctx.scan_generation {
        log::debug!("dropping results of superseded scan {generation}");
        return Task::none();
    }
    if outcome.skipped_entries > 0 {
        log::warn!("{} unreadable entries skipped", outcome.skipped_entries);
    }

    ctx.notifications.clear_load_errors();
    let request = ctx.cursor.rebuild(outcome.files);
    apply_display_request(ctx, request)
}

// =============================================================================
// Navigation and loading
// =============================================================================

fn advance(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    match ctx.cursor.advance(direction) {
        Some(request) => apply_display_request(ctx, request),
        None => Task::none(),
    }
}

pub fn handle_timer_fired(
    ctx: &mut UpdateContext<'_>,
    generation: crate::slideshow::TimerGeneration,
) -> Task<Message> {
    match ctx.cursor.timer_fired(generation) {
        Some(request) => apply_display_request(ctx, request),
        None => Task::none(),
    }
}

fn apply_display_request(ctx: &mut UpdateContext<'_>, request: DisplayRequest) -> Task<Message> {
    match request {
        DisplayRequest::Show { path, ticket } => load_task(path, ticket),
        DisplayRequest::Clear => {
            clear_viewer(ctx);
            Task::none()
        }
    }
}

fn clear_viewer(ctx: &mut UpdateContext<'_>) {
    ctx.viewer.clear();
    *ctx.displayed = None;
}

fn load_task(path: PathBuf, ticket: LoadTicket) -> Task<Message> {
    Task::perform(
        async move {
            let decode_path = path.clone();
            let result = tokio::task::spawn_blocking(move || media::load_image(&decode_path))
                .await
                .unwrap_or_else(|error| Err(Error::Io(error.to_string())));
            (path, result)
        },
        move |(path, result)| Message::ImageLoaded {
            ticket,
            path,
            result,
        },
    )
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            if !ctx.cursor.display_succeeded(ticket) {
                log::debug!("dropping stale image {}", path.display());
                return Task::none();
            }
            *ctx.displayed = Some(path);
            ctx.viewer.display(Some(image)).map(Message::Viewer)
        }
        Err(error) => {
            let outcome = ctx.cursor.display_failed(ticket);
            if outcome == SkipOutcome::Stale {
                return Task::none();
            }

            log::warn!("couldn't load {}: {error}", path.display());
            ctx.notifications.push(
                Notification::error(error.i18n_key())
                    .with_arg("path", path.display().to_string()),
            );

            match outcome {
                SkipOutcome::Skipped(request) => apply_display_request(ctx, request),
                // The timer stays armed while Playing, so its next firing
                // starts a fresh chain.
                SkipOutcome::GaveUp | SkipOutcome::Stale => {
                    clear_viewer(ctx);
                    Task::none()
                }
            }
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn toggle_buttons(ctx: &mut UpdateContext<'_>) {
    *ctx.buttons_visible = !*ctx.buttons_visible;
    ctx.config.layout.buttons_visible = Some(*ctx.buttons_visible);
    persist(ctx);
}

fn persist(ctx: &mut UpdateContext<'_>) {
    if let Some(notification) = persistence::persist_preferences(ctx.config) {
        ctx.notifications.push(notification);
    }
}

async fn pick_folder(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}
