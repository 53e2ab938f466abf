// SPDX-License-Identifier: MPL-2.0
//! Slideshow interval domain type.

use crate::config::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::error::{Error, Result};
use std::time::Duration;

/// Delay between two slides, guaranteed to be within 100 ms – 1 h.
///
/// # Example
///
/// ```
/// use imgv::slideshow::Interval;
///
/// let interval = Interval::new(4000);
/// assert_eq!(interval.millis(), 4000);
///
/// // Values outside range are clamped
/// assert_eq!(Interval::new(0).millis(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval(u64);

impl Interval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
    }

    /// Parses user input strictly: no clamping, only in-range integers are accepted.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let millis: u64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidInterval(format!("not a whole number: {trimmed:?}")))?;

        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&millis) {
            return Err(Error::InvalidInterval(format!(
                "{millis} ms is outside {MIN_INTERVAL_MS}..={MAX_INTERVAL_MS}"
            )));
        }

        Ok(Self(millis))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(Interval::new(0).millis(), MIN_INTERVAL_MS);
        assert_eq!(Interval::new(u64::MAX).millis(), MAX_INTERVAL_MS);
        assert_eq!(Interval::new(1500).millis(), 1500);
    }

    #[test]
    fn default_matches_config_default() {
        assert_eq!(Interval::default().millis(), DEFAULT_INTERVAL_MS);
        assert_eq!(
            Interval::default().as_duration(),
            Duration::from_millis(DEFAULT_INTERVAL_MS)
        );
    }

    #[test]
    fn parse_accepts_whitespace_around_number() {
        assert_eq!(Interval::parse(" 3000 ").map(Interval::millis).ok(), Some(3000));
    }

    #[test]
    fn parse_rejects_invalid_input() {
        for input in ["", "abc", "-5", "0", "12.5", "99999999999"] {
            assert!(
                matches!(Interval::parse(input), Err(Error::InvalidInterval(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
