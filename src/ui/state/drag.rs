// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Grab-and-drag panning: the cursor position and scroll offset are captured
//! when the button goes down, and every later cursor position maps to a new
//! offset moving the content with the pointer.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    cursor: Point,
    offset: AbsoluteOffset,
}

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    anchor: Option<DragAnchor>,
}

impl DragState {
    /// Starts a drag at `cursor` while the view is scrolled to `offset`.
    pub fn start(&mut self, cursor: Point, offset: AbsoluteOffset) {
        self.anchor = Some(DragAnchor { cursor, offset });
    }

    pub fn stop(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Offset for the cursor now at `current`, clamped to `0..=max`.
    ///
    /// Moving the cursor right scrolls the content left.
    #[must_use]
    pub fn offset_for(&self, current: Point, max: AbsoluteOffset) -> Option<AbsoluteOffset> {
        let anchor = self.anchor?;
        let x = anchor.offset.x - (current.x - anchor.cursor.x);
        let y = anchor.offset.y - (current.y - anchor.cursor.y);
        Some(AbsoluteOffset {
            x: x.clamp(0.0, max.x.max(0.0)),
            y: y.clamp(0.0, max.y.max(0.0)),
        })
    }
}
