// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: menu bar, then the sources panel beside the
//! viewport and buttons bar, then the status line.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::slideshow::{PlaybackState, Sources};
use crate::ui::controls;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, status_line};
use crate::ui::sources_panel::{self, ViewContext as SourcesViewContext};
use crate::ui::viewer::component;
use iced::widget::{Column, Container, Row};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navbar: &'a navbar::State,
    pub sources: &'a Sources,
    pub sources_panel: sources_panel::State,
    pub sources_panel_visible: bool,
    pub buttons_visible: bool,
    pub playback: PlaybackState,
    pub viewer: &'a component::State,
    pub notifications: &'a notifications::Manager,
    pub displayed: Option<&'a Path>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu_bar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        buttons_visible: ctx.buttons_visible,
    })
    .map(Message::Navbar);

    let mut stage = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(ctx.viewer.view().map(Message::Viewer))
                .width(Length::Fill)
                .height(Length::Fill),
        );
    if ctx.buttons_visible {
        stage = stage.push(
            controls::view(controls::ViewContext {
                i18n: ctx.i18n,
                playback: ctx.playback,
            })
            .map(Message::Controls),
        );
    }

    let mut body = Row::new().width(Length::Fill).height(Length::Fill);
    if ctx.sources_panel_visible {
        body = body.push(
            sources_panel::view(SourcesViewContext {
                i18n: ctx.i18n,
                sources: ctx.sources,
                state: ctx.sources_panel,
            })
            .map(Message::SourcesPanel),
        );
    }
    body = body.push(stage);

    let status = status_line::view(status_line::resolve(
        ctx.notifications,
        ctx.displayed,
        ctx.i18n,
    ));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(menu_bar)
        .push(body)
        .push(status)
        .into()
}
