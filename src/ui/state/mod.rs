// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state kept apart from the widgets that render it, so the pan/zoom
//! math can be tested without a window.

pub mod drag;
pub mod viewport;
pub mod zoom;

pub use drag::DragState;
pub use viewport::ViewportState;
pub use zoom::{ZoomDirection, ZoomState};
