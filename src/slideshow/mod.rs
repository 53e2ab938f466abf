// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent slideshow logic.
//!
//! - [`sources`] - the user's source directories (set semantics)
//! - [`cursor`] - shuffled file list, position, play/pause and skipping
//! - [`timer`] - generation-tagged single-slot timer bookkeeping
//! - [`interval`] - validated slide interval
//! - [`skip`] - consecutive load-failure tracking

pub mod cursor;
pub mod interval;
pub mod skip;
pub mod sources;
pub mod timer;

pub use cursor::{Cursor, DisplayRequest, LoadTicket, PlaybackState, SkipOutcome};
pub use interval::Interval;
pub use sources::Sources;
pub use timer::{ArmedTimer, SlideTimer, TimerGeneration};

/// Direction of travel through the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}
