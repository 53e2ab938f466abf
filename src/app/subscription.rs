// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the viewer (mouse and window) or translated
//! into key bindings (keyboard). The slide timer and the status tick are
//! only subscribed while they have work to do.

use super::message::Keybinding;
use super::Message;
use crate::slideshow::ArmedTimer;
use crate::ui::viewer::component;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        match &event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                // Captured presses belong to a focused text input.
                if status == event::Status::Captured {
                    return None;
                }
                keybinding_for(key, *modifiers).map(Message::Keybinding)
            }
            event::Event::Keyboard(_) => None,
            // Wheel always zooms; releases and moves must reach an ongoing drag
            // even when a widget under the cursor captured them.
            event::Event::Mouse(
                mouse::Event::WheelScrolled { .. }
                | mouse::Event::ButtonReleased(_)
                | mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft,
            )
            | event::Event::Window(iced::window::Event::Resized(_)) => {
                Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }))
            }
            _ => match status {
                event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })),
                event::Status::Captured => None,
            },
        }
    })
}

/// Maps a key press to a binding.
///
/// Presses with the command (Ctrl/Cmd) or Alt modifier are left to the system.
pub fn keybinding_for(key: &Key, modifiers: Modifiers) -> Option<Keybinding> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowRight) => Some(Keybinding::Next),
        Key::Named(Named::ArrowLeft) => Some(Keybinding::Previous),
        Key::Named(Named::Space) => Some(Keybinding::PlayPause),
        Key::Character(c) => match c.to_ascii_lowercase().as_str() {
            "l" => Some(Keybinding::Next),
            "k" => Some(Keybinding::Previous),
            "s" => Some(Keybinding::ToggleSourcesPanel),
            "b" => Some(Keybinding::ToggleButtonsPanel),
            _ => None,
        },
        _ => None,
    }
}

/// One subscription per armed generation, so restarting the timer replaces
/// the running one even when the period is unchanged.
pub fn create_timer_subscription(armed: Option<ArmedTimer>) -> Subscription<Message> {
    match armed {
        Some(timer) => time::every(timer.period)
            .with(timer.generation)
            .map(|(generation, _)| Message::TimerFired(generation)),
        None => Subscription::none(),
    }
}

/// Periodic tick for status message expiry.
pub fn create_tick_subscription(has_notifications: bool, period: Duration) -> Subscription<Message> {
    if has_notifications {
        time::every(period).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
