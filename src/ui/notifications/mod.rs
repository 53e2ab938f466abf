// SPDX-License-Identifier: MPL-2.0
//! Status messages for user feedback.
//!
//! Failures and confirmations are pushed as short-lived notifications and
//! shown in the status line at the bottom of the window, which otherwise
//! displays the path of the current photo.
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`status_line`] - the status bar view

mod manager;
mod notification;
pub mod status_line;

pub use manager::{Manager, Message as NotificationMessage, LOAD_ERROR_PREFIX};
pub use notification::{Notification, Severity};
