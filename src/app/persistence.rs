// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Preferences (interval, panel visibility, language) are written back to
//! `settings.toml` whenever the user changes one of them. Sources are never
//! persisted.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Notification;
use unic_langid::LanguageIdentifier;

/// Writes `config` to disk.
///
/// Returns a warning notification when saving failed. Skipped under tests
/// so unit tests never touch the user's config directory.
pub fn persist_preferences(config: &Config) -> Option<Notification> {
    if cfg!(test) {
        return None;
    }

    match config::save(config) {
        Ok(()) => None,
        Err(error) => {
            log::warn!("failed to save config: {error}");
            Some(Notification::warning(error.i18n_key()))
        }
    }
}

/// Switches the UI language and persists the choice.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> Option<Notification> {
    log::info!("switching language to {locale}");
    config.general.language = Some(locale.to_string());
    i18n.set_locale(locale);
    persist_preferences(config)
}
