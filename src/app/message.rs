// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::directory_scanner::ScanOutcome;
use crate::error::Error;
use crate::media::ImageData;
use crate::slideshow::{LoadTicket, TimerGeneration};
use crate::ui::controls;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sources_panel;
use crate::ui::viewer::component;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Navbar(navbar::Message),
    SourcesPanel(sources_panel::Message),
    Controls(controls::Message),
    Notification(notifications::NotificationMessage),
    Keybinding(Keybinding),
    /// Result of the folder picker; `None` when cancelled.
    SourcePicked(Option<PathBuf>),
    ScanCompleted {
        /// Scan generation the result belongs to.
        generation: u64,
        outcome: ScanOutcome,
    },
    ImageLoaded {
        ticket: LoadTicket,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    TimerFired(TimerGeneration),
    /// Periodic tick for status message expiry.
    Tick(Instant),
}

/// Logical key bindings, independent of the physical keys mapped to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keybinding {
    Next,
    Previous,
    ToggleSourcesPanel,
    ToggleButtonsPanel,
    PlayPause,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Session-only interval override, in milliseconds.
    pub interval_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMGV_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directories added as sources at startup.
    pub sources: Vec<PathBuf>,
}
