// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the scrollable area's bounds and scroll offset, and answers the
//! geometry questions that depend on them: how far the content can scroll,
//! where the centered image sits on screen, and which image pixel lies
//! under a window position.

use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Padding, Point, Rectangle, Size};

/// Size changes below this many pixels are layout jitter, not a resize.
const RESIZE_EPSILON: f32 = 0.5;

/// Manages viewport and scroll state
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds, in window coordinates
    pub bounds: Option<Rectangle>,
}

impl ViewportState {
    /// Resets the scroll offset to the origin.
    pub fn reset_offset(&mut self) {
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Records new bounds and offset.
    ///
    /// Returns true if the viewport size changed (including the first layout).
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.offset = offset;
        let resized = match self.bounds {
            Some(prev) => {
                (prev.width - bounds.width).abs() > RESIZE_EPSILON
                    || (prev.height - bounds.height).abs() > RESIZE_EPSILON
            }
            None => true,
        };
        self.bounds = Some(bounds);
        resized
    }

    /// Viewport size, or zero before the first layout.
    #[must_use]
    pub fn size(&self) -> Size {
        self.bounds.map_or(Size::ZERO, |b| b.size())
    }

    /// Farthest the view can scroll for content of `scaled` size.
    #[must_use]
    pub fn max_offset(&self, scaled: Size) -> AbsoluteOffset {
        let size = self.size();
        AbsoluteOffset {
            x: (scaled.width - size.width).max(0.0),
            y: (scaled.height - size.height).max(0.0),
        }
    }

    /// Converts an absolute offset into the 0..=1 form used by `snap_to`.
    #[must_use]
    pub fn relative_offset(&self, offset: AbsoluteOffset, scaled: Size) -> RelativeOffset {
        let max = self.max_offset(scaled);
        RelativeOffset {
            x: if max.x > 0.0 { (offset.x / max.x).clamp(0.0, 1.0) } else { 0.0 },
            y: if max.y > 0.0 { (offset.y / max.y).clamp(0.0, 1.0) } else { 0.0 },
        }
    }

    /// Offset that keeps the image point under `anchor` (window coordinates)
    /// fixed while the content grows from `old_scaled` to `new_scaled`.
    #[must_use]
    pub fn anchored_offset(&self, anchor: Point, old_scaled: Size, new_scaled: Size) -> AbsoluteOffset {
        let Some(bounds) = self.bounds else {
            return AbsoluteOffset { x: 0.0, y: 0.0 };
        };
        if old_scaled.width <= 0.0 || old_scaled.height <= 0.0 {
            return AbsoluteOffset { x: 0.0, y: 0.0 };
        }

        let local_x = anchor.x - bounds.x;
        let local_y = anchor.y - bounds.y;
        let old_pad = centering_padding(old_scaled, bounds.size());
        let new_pad = centering_padding(new_scaled, bounds.size());

        let fx = (self.offset.x + local_x - old_pad.left) / old_scaled.width;
        let fy = (self.offset.y + local_y - old_pad.top) / old_scaled.height;

        let max = self.max_offset(new_scaled);
        AbsoluteOffset {
            x: (fx * new_scaled.width + new_pad.left - local_x).clamp(0.0, max.x),
            y: (fy * new_scaled.height + new_pad.top - local_y).clamp(0.0, max.y),
        }
    }

    /// Where the image of `scaled` size is drawn, in window coordinates.
    #[must_use]
    pub fn image_rect(&self, scaled: Size) -> Option<Rectangle> {
        let bounds = self.bounds?;
        let padding = centering_padding(scaled, bounds.size());
        Some(Rectangle::new(
            Point::new(
                bounds.x - self.offset.x + padding.left,
                bounds.y - self.offset.y + padding.top,
            ),
            scaled,
        ))
    }

    /// Maps a window position to image pixel coordinates.
    ///
    /// Returns `None` outside the viewport or on the letterbox background.
    #[must_use]
    pub fn image_point(&self, position: Point, scaled: Size, scale: f32) -> Option<Point> {
        let bounds = self.bounds?;
        if scale <= 0.0 || !bounds.contains(position) {
            return None;
        }
        let rect = self.image_rect(scaled)?;
        if !rect.contains(position) {
            return None;
        }
        Some(Point::new(
            (position.x - rect.x) / scale,
            (position.y - rect.y) / scale,
        ))
    }
}

/// Padding that centers content of `content` size inside `available`.
#[must_use]
pub fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn viewport_at(x: f32, y: f32, w: f32, h: f32) -> ViewportState {
        ViewportState {
            bounds: Some(Rectangle::new(Point::new(x, y), Size::new(w, h))),
            ..ViewportState::default()
        }
    }

    #[test]
    fn first_update_counts_as_resize() {
        let mut state = ViewportState::default();
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0));
        assert!(state.update(bounds, AbsoluteOffset { x: 0.0, y: 0.0 }));
        assert!(!state.update(bounds, AbsoluteOffset { x: 10.0, y: 5.0 }));
        assert_abs_diff_eq!(state.offset.x, 10.0);
    }

    #[test]
    fn size_change_is_reported() {
        let mut state = viewport_at(0.0, 0.0, 400.0, 300.0);
        let bigger = Rectangle::new(Point::ORIGIN, Size::new(420.0, 300.0));
        assert!(state.update(bigger, AbsoluteOffset { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn max_offset_is_zero_when_content_fits() {
        let state = viewport_at(0.0, 0.0, 400.0, 300.0);
        let max = state.max_offset(Size::new(200.0, 500.0));
        assert_abs_diff_eq!(max.x, 0.0);
        assert_abs_diff_eq!(max.y, 200.0);
    }

    #[test]
    fn relative_offset_normalizes() {
        let state = viewport_at(0.0, 0.0, 400.0, 300.0);
        let relative =
            state.relative_offset(AbsoluteOffset { x: 200.0, y: 150.0 }, Size::new(800.0, 600.0));
        assert_abs_diff_eq!(relative.x, 0.5);
        assert_abs_diff_eq!(relative.y, 0.5);
    }

    #[test]
    fn image_rect_is_centered() {
        let state = viewport_at(10.0, 20.0, 400.0, 300.0);
        let rect = state.image_rect(Size::new(200.0, 300.0)).expect("bounds known");
        assert_abs_diff_eq!(rect.x, 110.0);
        assert_abs_diff_eq!(rect.y, 20.0);
    }

    #[test]
    fn image_point_rejects_letterbox() {
        let state = viewport_at(0.0, 0.0, 400.0, 300.0);
        let scaled = Size::new(200.0, 300.0);

        assert!(state.image_point(Point::new(50.0, 150.0), scaled, 0.5).is_none());

        let hit = state
            .image_point(Point::new(150.0, 100.0), scaled, 0.5)
            .expect("inside the image");
        assert_abs_diff_eq!(hit.x, 100.0);
        assert_abs_diff_eq!(hit.y, 200.0);
    }

    #[test]
    fn anchored_offset_keeps_point_under_cursor() {
        let state = viewport_at(0.0, 0.0, 400.0, 400.0);
        let old = Size::new(400.0, 400.0);
        let new = Size::new(800.0, 800.0);

        // Zooming 2x around the center scrolls to the middle.
        let offset = state.anchored_offset(Point::new(200.0, 200.0), old, new);
        assert_abs_diff_eq!(offset.x, 200.0);
        assert_abs_diff_eq!(offset.y, 200.0);

        // Anchored at the top-left corner the origin stays put.
        let offset = state.anchored_offset(Point::ORIGIN, old, new);
        assert_abs_diff_eq!(offset.x, 0.0);
        assert_abs_diff_eq!(offset.y, 0.0);
    }
}
