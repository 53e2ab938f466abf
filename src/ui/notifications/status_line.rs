// SPDX-License-Identifier: MPL-2.0
//! The one-line status bar at the bottom of the window.
//!
//! A live transient message wins; otherwise the full path of the photo on
//! screen is shown.

use super::manager::Manager;
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, text, Container, Text};
use iced::{Background, Color, Element, Length, Theme};
use std::path::Path;

/// What the status line displays.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusText {
    pub text: String,
    pub color: Color,
}

/// Resolves the status line content without building any widget.
#[must_use]
pub fn resolve(manager: &Manager, current: Option<&Path>, i18n: &I18n) -> StatusText {
    if let Some(notification) = manager.latest() {
        return StatusText {
            text: message_text(notification, i18n),
            color: notification.severity().color(),
        };
    }

    StatusText {
        text: current
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        color: palette::GRAY_200,
    }
}

/// Resolves a message's i18n key with its arguments.
pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
    if notification.message_args().is_empty() {
        return i18n.tr(notification.message_key());
    }
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &args)
}

pub fn view<'a, Message: 'a>(status: StatusText) -> Element<'a, Message> {
    let color = status.color;
    let label = Text::new(status.text)
        .size(typography::BODY_SM)
        .style(move |_theme: &Theme| text::Style { color: Some(color) });

    Container::new(label)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..Default::default()
        })
        .into()
}
