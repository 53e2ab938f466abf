// SPDX-License-Identifier: MPL-2.0
//! The viewport component: one displayed photo with fit, zoom and pan.
//!
//! Geometry lives in [`crate::ui::state`]; this component wires it to raw
//! window and mouse events and to the scrollable that renders the photo.

use super::pane;
use crate::media::ImageData;
use crate::ui::state::{DragState, ViewportState, ZoomDirection, ZoomState};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{event, mouse, window, Element, Point, Rectangle, Size, Task, Vector};

pub const SCROLLABLE_ID: &str = "imgv-viewport";

#[derive(Debug, Clone)]
pub enum Message {
    /// Reported by the scrollable whenever its bounds or offset change.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Notifications for the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    /// Left click on the photo, in image pixel coordinates.
    PhotoClicked(Point),
}

#[derive(Debug, Default)]
pub struct State {
    image: Option<ImageData>,
    zoom: ZoomState,
    viewport: ViewportState,
    drag: DragState,
    cursor_position: Option<Point>,
    refit_pending: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn has_photo(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn zoom_state(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Native size of the photo, if one is shown.
    fn image_size(&self) -> Option<Size> {
        self.image
            .as_ref()
            .map(|image| Size::new(image.width as f32, image.height as f32))
    }

    /// On-screen size of the photo at the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.image_size()
            .map_or(Size::ZERO, |size| self.zoom.scaled(size))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replaces the displayed photo. `None` or a zero-sized image empties the view.
    pub fn display(&mut self, image: Option<ImageData>) -> Task<Message> {
        self.drag.stop();
        self.zoom = ZoomState::default();
        self.image = image.filter(|image| !image.is_empty());

        if self.image.is_none() {
            self.viewport.reset_offset();
            return Task::none();
        }
        self.fit_to_window()
    }

    /// Drops the photo; the viewport shows only its background.
    pub fn clear(&mut self) {
        self.drag.stop();
        self.zoom = ZoomState::default();
        self.image = None;
        self.viewport.reset_offset();
    }

    /// Scales the photo to be fully visible and centered, undoing zoom and pan.
    pub fn fit_to_window(&mut self) -> Task<Message> {
        let Some(image) = self.image_size() else {
            return Task::none();
        };
        self.zoom.fit(image, self.viewport.size());
        self.viewport.reset_offset();
        snap_to(RelativeOffset { x: 0.0, y: 0.0 })
    }

    /// Applies one zoom step, keeping the image point under `anchor` in place.
    ///
    /// Without an anchor the viewport center is used.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: Option<Point>) -> Task<Message> {
        let Some(image) = self.image_size() else {
            return Task::none();
        };
        // Zooming before the first layout could not be refit later.
        let Some(bounds) = self.viewport.bounds else {
            return Task::none();
        };

        let old_scaled = self.zoom.scaled(image);
        self.zoom.zoom(direction, image, bounds.size());
        if self.zoom.is_fitted() {
            self.viewport.reset_offset();
            return snap_to(RelativeOffset { x: 0.0, y: 0.0 });
        }

        let new_scaled = self.zoom.scaled(image);
        let anchor = anchor.unwrap_or_else(|| bounds.center());
        let offset = self.viewport.anchored_offset(anchor, old_scaled, new_scaled);
        self.viewport.offset = offset;
        snap_to(self.viewport.relative_offset(offset, new_scaled))
    }

    /// Scrolls the visible region by `delta`. Does nothing without a photo.
    pub fn pan(&mut self, delta: Vector) -> Task<Message> {
        if !self.has_photo() {
            return Task::none();
        }
        let scaled = self.scaled_size();
        let max = self.viewport.max_offset(scaled);
        let offset = AbsoluteOffset {
            x: (self.viewport.offset.x + delta.x).clamp(0.0, max.x),
            y: (self.viewport.offset.y + delta.y).clamp(0.0, max.y),
        };
        self.viewport.offset = offset;
        snap_to(self.viewport.relative_offset(offset, scaled))
    }

    /// Hit-tests a click at `position` (window coordinates) against the photo.
    #[must_use]
    pub fn notify_clicked(&self, position: Point) -> Event {
        if !self.has_photo() {
            return Event::None;
        }
        self.viewport
            .image_point(position, self.scaled_size(), self.zoom.scale())
            .map_or(Event::None, Event::PhotoClicked)
    }

    pub fn handle_message(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::ViewportChanged { bounds, offset } => {
                let resized = self.viewport.update(bounds, offset);
                if resized || self.refit_pending {
                    self.refit_pending = false;
                    return (Event::None, self.fit_to_window());
                }
                (Event::None, Task::none())
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Event, Task<Message>) {
        match event {
            event::Event::Window(window::Event::Resized(_)) => {
                // The scrollable reports its new bounds on the next layout.
                self.drag.stop();
                self.refit_pending = true;
                (Event::None, Task::none())
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => (Event::None, Task::none()),
        }
    }

    fn handle_mouse_event(&mut self, event: mouse::Event) -> (Event, Task<Message>) {
        match event {
            mouse::Event::WheelScrolled { delta } => {
                let Some(position) = self.cursor_in_viewport() else {
                    return (Event::None, Task::none());
                };
                let steps = scroll_steps(&delta);
                let task = if steps > 0.0 {
                    self.zoom(ZoomDirection::In, Some(position))
                } else if steps < 0.0 {
                    self.zoom(ZoomDirection::Out, Some(position))
                } else {
                    Task::none()
                };
                (Event::None, task)
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(position) = self.cursor_in_viewport() else {
                    return (Event::None, Task::none());
                };
                if !self.has_photo() {
                    return (Event::None, Task::none());
                }
                self.drag.start(position, self.viewport.offset);
                (self.notify_clicked(position), Task::none())
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.drag.stop();
                (Event::None, Task::none())
            }
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                (Event::None, self.drag_to(position))
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.drag.stop();
                (Event::None, Task::none())
            }
            _ => (Event::None, Task::none()),
        }
    }

    fn cursor_in_viewport(&self) -> Option<Point> {
        let position = self.cursor_position?;
        self.viewport
            .bounds
            .filter(|bounds| bounds.contains(position))
            .map(|_| position)
    }

    fn drag_to(&mut self, position: Point) -> Task<Message> {
        let scaled = self.scaled_size();
        let max = self.viewport.max_offset(scaled);
        let Some(offset) = self.drag.offset_for(position, max) else {
            return Task::none();
        };
        self.viewport.offset = offset;
        snap_to(self.viewport.relative_offset(offset, scaled))
    }

    pub fn view(&self) -> Element<'_, Message> {
        pane::view(pane::ViewModel {
            image: self.image.as_ref(),
            scaled: self.scaled_size(),
            is_dragging: self.drag.is_dragging(),
            scrollable_id: SCROLLABLE_ID,
        })
    }
}

fn snap_to(offset: RelativeOffset) -> Task<Message> {
    operation::snap_to(Id::new(SCROLLABLE_ID), offset)
}

/// Normalizes mouse wheel units (lines vs. pixels) into steps.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn photo(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    fn window_id() -> window::Id {
        window::Id::unique()
    }

    /// A viewer laid out in a 400x300 viewport at the window origin.
    fn laid_out() -> State {
        let mut state = State::new();
        let _ = state.handle_message(Message::ViewportChanged {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)),
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
        });
        state
    }

    fn mouse(state: &mut State, event: mouse::Event) -> Event {
        state
            .handle_message(Message::RawEvent {
                window: window_id(),
                event: event::Event::Mouse(event),
            })
            .0
    }

    #[test]
    fn display_fits_and_resets_zoom() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));

        assert!(state.has_photo());
        assert_eq!(state.zoom_state().step(), 0);
        assert_abs_diff_eq!(state.zoom_state().scale(), 0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn display_none_empties_view() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(10, 10)));
        let _ = state.display(None);
        assert!(!state.has_photo());
        assert_eq!(state.scaled_size(), Size::ZERO);
    }

    #[test]
    fn zero_sized_image_is_treated_as_empty() {
        let mut state = laid_out();
        let _ = state.display(Some(ImageData::from_rgba(0, 0, Vec::new())));
        assert!(!state.has_photo());
    }

    #[test]
    fn zoom_round_trip_restores_fit() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));
        let fitted = state.zoom_state().scale();

        let _ = state.zoom(ZoomDirection::In, None);
        assert_eq!(state.zoom_state().step(), 1);
        let _ = state.zoom(ZoomDirection::Out, None);

        assert_eq!(state.zoom_state().step(), 0);
        assert_abs_diff_eq!(state.zoom_state().scale(), fitted, epsilon = F32_EPSILON);
    }

    #[test]
    fn zoom_before_first_layout_changes_nothing() {
        let mut state = State::new();
        let _ = state.display(Some(photo(800, 600)));
        let scale = state.zoom_state().scale();

        let _ = state.zoom(ZoomDirection::In, None);
        let _ = state.zoom(ZoomDirection::Out, None);
        let _ = state.zoom(ZoomDirection::In, None);

        assert_eq!(state.zoom_state().step(), 0);
        assert_abs_diff_eq!(state.zoom_state().scale(), scale, epsilon = F32_EPSILON);
    }

    #[test]
    fn resize_refits_even_when_zoomed() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));
        let _ = state.zoom(ZoomDirection::In, None);
        let _ = state.zoom(ZoomDirection::In, None);

        let _ = state.handle_message(Message::ViewportChanged {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0)),
            offset: AbsoluteOffset { x: 40.0, y: 40.0 },
        });

        assert_eq!(state.zoom_state().step(), 0);
        assert_abs_diff_eq!(state.zoom_state().scale(), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.viewport_state().offset.x, 0.0);
    }

    #[test]
    fn window_resize_refits_on_next_layout() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));
        let _ = state.zoom(ZoomDirection::In, None);

        let _ = state.handle_message(Message::RawEvent {
            window: window_id(),
            event: event::Event::Window(window::Event::Resized(Size::new(400.0, 300.0))),
        });
        // Same bounds as before, but the pending resize still refits.
        let _ = state.handle_message(Message::ViewportChanged {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)),
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
        });
        assert!(state.zoom_state().is_fitted());
    }

    #[test]
    fn pan_requires_a_photo() {
        let mut state = laid_out();
        let _ = state.pan(Vector::new(50.0, 50.0));
        assert_abs_diff_eq!(state.viewport_state().offset.x, 0.0);

        let _ = state.display(Some(photo(800, 600)));
        let _ = state.zoom(ZoomDirection::In, None);
        let _ = state.zoom(ZoomDirection::In, None);
        let before = state.viewport_state().offset;
        let _ = state.pan(Vector::new(-10_000.0, 10_000.0));

        let max = state.viewport_state().max_offset(state.scaled_size());
        assert_abs_diff_eq!(state.viewport_state().offset.x, 0.0);
        assert_abs_diff_eq!(state.viewport_state().offset.y, max.y);
        assert!(before.y <= max.y);
    }

    #[test]
    fn click_on_letterbox_is_ignored() {
        let mut state = laid_out();
        // 100x300 photo fitted into 400x300 is drawn at x = 150..250.
        let _ = state.display(Some(photo(100, 300)));

        assert_eq!(state.notify_clicked(Point::new(20.0, 150.0)), Event::None);
        assert_eq!(
            state.notify_clicked(Point::new(200.0, 150.0)),
            Event::PhotoClicked(Point::new(50.0, 150.0))
        );
    }

    #[test]
    fn left_press_on_photo_emits_click_and_starts_drag() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(100, 300)));

        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(200.0, 150.0),
            },
        );
        let event = mouse(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));

        assert!(matches!(event, Event::PhotoClicked(_)));
        assert!(state.is_dragging());

        mouse(&mut state, mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_without_photo_does_not_drag() {
        let mut state = laid_out();
        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(200.0, 150.0),
            },
        );
        let event = mouse(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(event, Event::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn dragging_moves_offset_against_cursor() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));
        for _ in 0..4 {
            let _ = state.zoom(ZoomDirection::In, Some(Point::ORIGIN));
        }

        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(200.0, 150.0),
            },
        );
        mouse(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));
        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(150.0, 120.0),
            },
        );

        let offset = state.viewport_state().offset;
        assert_abs_diff_eq!(offset.x, 50.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(offset.y, 30.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn wheel_outside_viewport_is_ignored() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));

        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(900.0, 900.0),
            },
        );
        mouse(
            &mut state,
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            },
        );
        assert_eq!(state.zoom_state().step(), 0);

        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(100.0, 100.0),
            },
        );
        mouse(
            &mut state,
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Pixels { x: 0.0, y: 120.0 },
            },
        );
        assert_eq!(state.zoom_state().step(), 1);
    }

    #[test]
    fn cursor_left_stops_drag() {
        let mut state = laid_out();
        let _ = state.display(Some(photo(800, 600)));
        mouse(
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(10.0, 10.0),
            },
        );
        mouse(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));
        mouse(&mut state, mouse::Event::CursorLeft);
        assert!(!state.is_dragging());
    }

    #[test]
    fn scroll_steps_normalizes_pixels() {
        let pixels = mouse::ScrollDelta::Pixels { x: 0.0, y: 240.0 };
        assert_abs_diff_eq!(scroll_steps(&pixels), 2.0);
    }
}
