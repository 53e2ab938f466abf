// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Float assertions come from `approx`; viewport and zoom math must never be
//! compared with `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for zoom factors and pixel offsets.
pub const F32_EPSILON: f32 = 1e-5;
