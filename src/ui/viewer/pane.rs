// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the photo inside the scrollable area with the
//! dark background and grab cursor.

use super::component::Message;
use crate::config::VIEWER_BACKGROUND_RGB;
use crate::media::ImageData;
use crate::ui::state::viewport::centering_padding;
use crate::ui::widgets::block_wheel;
use iced::mouse;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{container, mouse_area, responsive, Column, Container, Id, Scrollable};
use iced::{Background, Color, Element, Length, Size, Theme};

#[derive(Clone, Copy)]
pub struct ViewModel<'a> {
    pub image: Option<&'a ImageData>,
    /// On-screen size of the photo.
    pub scaled: Size,
    pub is_dragging: bool,
    pub scrollable_id: &'static str,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    responsive(move |available: Size| view_inner(model, available)).into()
}

fn view_inner(model: ViewModel<'_>, available: Size) -> Element<'_, Message> {
    let content: Element<'_, Message> = match model.image {
        Some(image) => Container::new(super::view_image(image, model.scaled))
            .padding(centering_padding(model.scaled, available))
            .into(),
        None => Column::new().into(),
    };

    let scrollable = Scrollable::new(content)
        .id(Id::new(model.scrollable_id))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else if model.image.is_some() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    Container::new(mouse_area(block_wheel(scrollable)).interaction(interaction))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(background_color())),
            ..Default::default()
        })
        .into()
}

pub fn background_color() -> Color {
    let (r, g, b) = VIEWER_BACKGROUND_RGB;
    Color::from_rgb8(r, g, b)
}
