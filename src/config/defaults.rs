// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Interval bounds for the auto-advance timer
//! - **Zoom**: Multiplicative zoom factors of the viewport
//! - **Status**: Transient status message lifetime and polling
//! - **Viewer**: Viewport background color

use std::time::Duration;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between two slides (in milliseconds).
pub const DEFAULT_INTERVAL_MS: u64 = 2500;

/// Minimum accepted slideshow interval (in milliseconds).
pub const MIN_INTERVAL_MS: u64 = 100;

/// Maximum accepted slideshow interval (one hour, in milliseconds).
pub const MAX_INTERVAL_MS: u64 = 3_600_000;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale multiplier applied for one zoom-in step.
pub const ZOOM_IN_FACTOR: f32 = 1.25;

/// Scale multiplier applied for one zoom-out step.
pub const ZOOM_OUT_FACTOR: f32 = 0.8;

// ==========================================================================
// Status Defaults
// ==========================================================================

/// How long a transient status message stays visible.
pub const STATUS_DURATION: Duration = Duration::from_millis(3000);

/// Polling period used to expire transient status messages.
pub const STATUS_TICK: Duration = Duration::from_millis(250);

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Viewport background, as 8-bit RGB.
pub const VIEWER_BACKGROUND_RGB: (u8, u8, u8) = (30, 30, 30);

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_INTERVAL_MS > 0);
    assert!(MIN_INTERVAL_MS <= DEFAULT_INTERVAL_MS);
    assert!(DEFAULT_INTERVAL_MS <= MAX_INTERVAL_MS);
    assert!(ZOOM_IN_FACTOR > 1.0);
    assert!(ZOOM_OUT_FACTOR < 1.0);
    assert!(ZOOM_OUT_FACTOR > 0.0);
    assert!(STATUS_TICK.as_millis() < STATUS_DURATION.as_millis());
};
