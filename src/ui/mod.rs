// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the app, and a
//! `view` taking a borrowed context.
//!
//! - [`viewer`] - Pan-and-zoom viewport for the current photo
//! - [`navbar`] - Menu bar with interval, reshuffle and language settings
//! - [`sources_panel`] - List of source folders
//! - [`controls`] - Previous, play/pause and next buttons
//! - [`notifications`] - Status line messages with expiry
//! - [`state`] - Zoom, drag and viewport math
//! - [`widgets`] - Custom Iced widgets
//! - [`design_tokens`] - Colors, spacing and sizing constants

pub mod controls;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sources_panel;
pub mod state;
pub mod viewer;
pub mod widgets;
