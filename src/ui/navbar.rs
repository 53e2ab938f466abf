// SPDX-License-Identifier: MPL-2.0
//! Menu bar at the top of the window.
//!
//! The settings dropdown holds the interval entry, the buttons bar toggle,
//! reshuffle, reload and the language choice.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::slideshow::Interval;
use crate::ui::design_tokens::{radius, sizing, spacing};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text_input, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Default)]
pub struct State {
    menu_open: bool,
    interval_input: String,
}

impl State {
    /// Starts with the entry showing `interval`.
    #[must_use]
    pub fn new(interval: Interval) -> Self {
        Self {
            menu_open: false,
            interval_input: interval.millis().to_string(),
        }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn interval_input(&self) -> &str {
        &self.interval_input
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    IntervalInputChanged(String),
    ApplyInterval,
    ToggleButtons,
    Reshuffle,
    Reload,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    IntervalChanged(Interval),
    /// The entry did not hold a valid interval; the old one stays.
    IntervalRejected(Error),
    ToggleButtons,
    Reshuffle,
    Reload,
    LanguageSelected(LanguageIdentifier),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::IntervalInputChanged(value) => {
            state.interval_input = value;
            Event::None
        }
        Message::ApplyInterval => match Interval::parse(&state.interval_input) {
            Ok(interval) => {
                state.interval_input = interval.millis().to_string();
                Event::IntervalChanged(interval)
            }
            Err(error) => Event::IntervalRejected(error),
        },
        Message::ToggleButtons => {
            state.menu_open = false;
            Event::ToggleButtons
        }
        Message::Reshuffle => {
            state.menu_open = false;
            Event::Reshuffle
        }
        Message::Reload => {
            state.menu_open = false;
            Event::Reload
        }
        Message::SelectLanguage(locale) => {
            state.menu_open = false;
            Event::LanguageSelected(locale)
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub buttons_visible: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu_button = button(Text::new(ctx.i18n.tr("menu-settings")))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(if ctx.state.menu_open {
            button::primary
        } else {
            button::secondary
        });

    let top_bar = Container::new(
        Row::new()
            .padding(spacing::XXS)
            .align_y(Vertical::Center)
            .push(menu_button),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Left);

    let mut content = Column::new().width(Length::Fill).push(top_bar);
    if ctx.state.menu_open {
        content = content.push(build_dropdown(&ctx));
    }
    content.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let interval_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("menu-interval")))
        .push(
            text_input(&i18n.tr("menu-interval-placeholder"), &ctx.state.interval_input)
                .on_input(Message::IntervalInputChanged)
                .on_submit(Message::ApplyInterval)
                .width(Length::Fixed(sizing::INTERVAL_INPUT_WIDTH)),
        )
        .push(button(Text::new(i18n.tr("menu-interval-apply"))).on_press(Message::ApplyInterval));

    let buttons_key = if ctx.buttons_visible {
        "menu-hide-buttons"
    } else {
        "menu-show-buttons"
    };

    let languages = i18n.available_locales.iter().fold(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("menu-language"))),
        |row, locale| {
            let style = if locale == i18n.current_locale() {
                button::primary
            } else {
                button::text
            };
            row.push(
                button(Text::new(locale.to_string()))
                    .on_press(Message::SelectLanguage(locale.clone()))
                    .style(style),
            )
        },
    );

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(interval_row)
        .push(menu_item(i18n.tr(buttons_key), Message::ToggleButtons))
        .push(menu_item(i18n.tr("menu-reshuffle"), Message::Reshuffle))
        .push(menu_item(i18n.tr("menu-reload"), Message::Reload))
        .push(languages);

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .width(Length::Fill)
        .style(button::text)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(Interval::new(2500))
    }

    #[test]
    fn entry_starts_with_current_interval() {
        assert_eq!(state().interval_input(), "2500");
    }

    #[test]
    fn valid_entry_changes_interval() {
        let mut state = state();
        update(Message::IntervalInputChanged(" 4000 ".into()), &mut state);
        let event = update(Message::ApplyInterval, &mut state);

        assert_eq!(event, Event::IntervalChanged(Interval::new(4000)));
        assert_eq!(state.interval_input(), "4000");
    }

    #[test]
    fn invalid_entry_is_rejected() {
        let mut state = state();
        for input in ["abc", "0", "-5", ""] {
            update(Message::IntervalInputChanged(input.into()), &mut state);
            let event = update(Message::ApplyInterval, &mut state);
            assert!(
                matches!(event, Event::IntervalRejected(Error::InvalidInterval(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn menu_actions_close_the_menu() {
        let mut state = state();
        update(Message::ToggleMenu, &mut state);
        assert!(state.menu_open());

        assert_eq!(update(Message::Reshuffle, &mut state), Event::Reshuffle);
        assert!(!state.menu_open());
    }
}
