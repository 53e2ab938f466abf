// SPDX-License-Identifier: MPL-2.0
//! Photo viewport: renders the current photo and handles fit, zoom and pan.

pub mod component;
pub mod pane;

use self::component::Message;
use crate::media::ImageData;
use iced::widget::image::Image;
use iced::{ContentFit, Element, Length, Size};

/// The photo stretched to exactly `scaled`.
pub fn view_image(image_data: &ImageData, scaled: Size) -> Element<'_, Message> {
    let width = scaled.width.max(1.0);
    let height = scaled.height.max(1.0);

    Image::new(image_data.handle.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Fill)
        .into()
}
