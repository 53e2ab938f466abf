// SPDX-License-Identifier: MPL-2.0
//! Single-slot slideshow timer bookkeeping.
//!
//! The actual ticking is done by the UI runtime. This type only decides
//! whether a timer is armed, with which period, and whether a firing is
//! still current. Every `start` bumps the generation, so a firing tagged
//! with an older generation is recognized as stale and ignored.

use super::interval::Interval;
use std::time::Duration;

/// Identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerGeneration(u64);

impl TimerGeneration {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A timer that is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedTimer {
    pub generation: TimerGeneration,
    /// Period captured at start; later interval changes do not alter it.
    pub period: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct SlideTimer {
    interval: Interval,
    armed: Option<ArmedTimer>,
    next_generation: u64,
}

impl SlideTimer {
    #[must_use]
    pub fn new(interval: Interval) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    /// Arms a fresh full-interval timer, replacing any running one.
    pub fn start(&mut self) -> ArmedTimer {
        self.next_generation = self.next_generation.wrapping_add(1);
        let armed = ArmedTimer {
            generation: TimerGeneration(self.next_generation),
            period: self.interval.as_duration(),
        };
        self.armed = Some(armed);
        armed
    }

    pub fn stop(&mut self) {
        self.armed = None;
    }

    /// Changes the period used by the next `start`.
    pub fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[must_use]
    pub fn armed(&self) -> Option<ArmedTimer> {
        self.armed
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Whether a firing tagged `generation` belongs to the armed timer.
    #[must_use]
    pub fn accepts(&self, generation: TimerGeneration) -> bool {
        self.armed.is_some_and(|armed| armed.generation == generation)
    }
}
