// SPDX-License-Identifier: MPL-2.0
pub mod event_filter;

pub use event_filter::{block_wheel, EventFilter};
