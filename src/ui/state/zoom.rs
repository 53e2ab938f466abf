// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The zoom is tracked as a scale factor plus a signed step count relative
//! to the fit-to-window baseline. Step 0 always means "exactly fitted": when
//! the count returns to 0 the scale is recomputed from the sizes instead of
//! trusting the product of the step factors. Zooming out below the fitted
//! size is not allowed.

use crate::config::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use iced::Size;

/// Requested zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Manages the viewport's scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    /// Current scale factor (1.0 = one image pixel per logical pixel).
    scale: f32,
    /// Number of zoom steps applied since the last fit.
    step: i32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            step: 0,
        }
    }
}

/// Uniform scale that makes `image` fully visible inside `viewport`.
///
/// Returns `None` when either size is empty.
#[must_use]
pub fn fit_scale(image: Size, viewport: Size) -> Option<f32> {
    if image.width <= 0.0 || image.height <= 0.0 {
        return None;
    }
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let scale = (viewport.width / image.width).min(viewport.height / image.height);
    if scale.is_finite() && scale > 0.0 {
        Some(scale)
    } else {
        None
    }
}

impl ZoomState {
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Whether the scale is the fit-to-window baseline.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.step == 0
    }

    /// Fits `image` into `viewport` and resets the step count.
    ///
    /// Empty sizes leave the state untouched and return false.
    pub fn fit(&mut self, image: Size, viewport: Size) -> bool {
        match fit_scale(image, viewport) {
            Some(scale) => {
                self.scale = scale;
                self.step = 0;
                true
            }
            None => false,
        }
    }

    /// Applies one zoom step.
    pub fn zoom(&mut self, direction: ZoomDirection, image: Size, viewport: Size) {
        match direction {
            ZoomDirection::In => {
                self.step += 1;
                if self.step == 0 {
                    self.fit(image, viewport);
                } else {
                    self.scale *= ZOOM_IN_FACTOR;
                }
            }
            ZoomDirection::Out => {
                let step = self.step - 1;
                if step <= 0 {
                    self.step = 0;
                    self.fit(image, viewport);
                } else {
                    self.step = step;
                    self.scale *= ZOOM_OUT_FACTOR;
                }
            }
        }
    }

    /// Returns the on-screen size of `image` at the current scale.
    #[must_use]
    pub fn scaled(&self, image: Size) -> Size {
        Size::new(image.width * self.scale, image.height * self.scale)
    }
}
