// SPDX-License-Identifier: MPL-2.0
//! Side panel listing the source folders, with Add and Remove buttons.

use crate::i18n::fluent::I18n;
use crate::slideshow::Sources;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Border, Element, Length, Theme};

/// Row selection. Cleared whenever the list changes under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    selected: Option<usize>,
}

impl State {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Drops a selection that no longer points into a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if self.selected.is_some_and(|index| index >= len) {
            self.selected = None;
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
    Add,
    Remove,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Open the folder picker.
    AddRequested,
    RemoveRequested(usize),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Select(index) => {
            state.selected = Some(index);
            Event::None
        }
        Message::Add => Event::AddRequested,
        Message::Remove => match state.selected.take() {
            Some(index) => Event::RemoveRequested(index),
            None => Event::None,
        },
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sources: &'a Sources,
    pub state: State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("sources-title")).size(typography::TITLE_SM);

    let rows = ctx
        .sources
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |column, (index, path)| {
            column.push(source_row(
                path.display().to_string(),
                index,
                ctx.state.selected == Some(index),
            ))
        });

    let list: Element<'_, Message> = if ctx.sources.is_empty() {
        Text::new(ctx.i18n.tr("sources-empty"))
            .size(typography::BODY_SM)
            .into()
    } else {
        scrollable(rows).height(Length::Fill).into()
    };

    let add = button(Text::new(ctx.i18n.tr("sources-add"))).on_press(Message::Add);
    let remove = button(Text::new(ctx.i18n.tr("sources-remove")))
        .on_press_maybe(ctx.state.selected.map(|_| Message::Remove));

    let actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(add)
        .push(remove);

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .height(Length::Fill)
        .push(title)
        .push(Container::new(list).height(Length::Fill))
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn source_row<'a>(label: String, index: usize, selected: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .width(Length::Fill)
        .padding(spacing::XXS)
        .on_press(Message::Select(index))
        .style(move |theme: &Theme, status| {
            if selected {
                button::Style {
                    background: Some(Background::Color(palette::PRIMARY_500)),
                    text_color: palette::WHITE,
                    border: Border {
                        radius: radius::SM.into(),
                        ..Default::default()
                    },
                    ..button::Style::default()
                }
            } else {
                button::text(theme, status)
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_without_selection_does_nothing() {
        let mut state = State::default();
        assert_eq!(update(Message::Remove, &mut state), Event::None);
    }

    #[test]
    fn remove_reports_selected_row_and_clears_it() {
        let mut state = State::default();
        update(Message::Select(1), &mut state);
        assert_eq!(state.selected(), Some(1));

        assert_eq!(update(Message::Remove, &mut state), Event::RemoveRequested(1));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn add_requests_picker() {
        let mut state = State::default();
        assert_eq!(update(Message::Add, &mut state), Event::AddRequested);
    }

    #[test]
    fn clamp_drops_out_of_range_selection() {
        let mut state = State::default();
        update(Message::Select(2), &mut state);
        state.clamp(3);
        assert_eq!(state.selected(), Some(2));
        state.clamp(2);
        assert_eq!(state.selected(), None);
    }
}
