// SPDX-License-Identifier: MPL-2.0
//! The buttons bar: previous, play/pause and next.

use crate::i18n::fluent::I18n;
use crate::slideshow::PlaybackState;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{button, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    PlayPause,
    Next,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub playback: PlaybackState,
}

/// i18n key for the play/pause button label.
#[must_use]
pub fn play_pause_label_key(playback: PlaybackState) -> &'static str {
    match playback {
        PlaybackState::Playing => "controls-pause",
        PlaybackState::Paused | PlaybackState::Empty => "controls-play",
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let enabled = ctx.playback != PlaybackState::Empty;
    let nav_button = |key: &str, message: Message| {
        button(
            Container::new(Text::new(ctx.i18n.tr(key)))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .on_press_maybe(enabled.then_some(message))
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .push(nav_button("controls-previous", Message::Previous))
        .push(nav_button(
            play_pause_label_key(ctx.playback),
            Message::PlayPause,
        ))
        .push(nav_button("controls-next", Message::Next));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reflects_playback() {
        assert_eq!(play_pause_label_key(PlaybackState::Playing), "controls-pause");
        assert_eq!(play_pause_label_key(PlaybackState::Paused), "controls-play");
        assert_eq!(play_pause_label_key(PlaybackState::Empty), "controls-play");
    }
}
