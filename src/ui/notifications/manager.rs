// SPDX-License-Identifier: MPL-2.0
//! Status message lifecycle management.
//!
//! The `Manager` handles display timing and dismissal. The status line shows
//! the newest message; older ones stay underneath until they expire or are
//! pushed out.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of messages kept at once; pushing more drops the oldest.
const MAX_VISIBLE: usize = 3;

/// Prefix shared by the i18n keys of photo load failures.
pub const LOAD_ERROR_PREFIX: &str = "notification-load-error-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of the auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Live messages, newest first.
    visible: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new message. It takes over the status line at once.
    pub fn push(&mut self, notification: Notification) {
        log::debug!("status message: {}", notification.message_key());
        self.visible.push_front(notification);
        self.visible.truncate(MAX_VISIBLE);
    }

    /// Returns `true` if the message was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.visible.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Dismisses every visible message that has outlived its duration.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired_at(now));
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// The message the status line should show.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.visible.front()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }

    /// Drops every photo load failure message.
    pub fn clear_load_errors(&mut self) {
        self.visible
            .retain(|n| !n.message_key().starts_with(LOAD_ERROR_PREFIX));
    }
}
