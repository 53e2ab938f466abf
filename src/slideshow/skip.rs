// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping for consecutive unloadable files.
//!
//! A chain starts with each user or timer navigation and grows by one for
//! every file that fails to load. Once every file of the list has failed
//! in a row the chain is exhausted and the cursor stops skipping until the
//! next navigation.

use super::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipChain {
    direction: Direction,
    failures: usize,
}

impl Default for SkipChain {
    fn default() -> Self {
        Self {
            direction: Direction::Forward,
            failures: 0,
        }
    }
}

impl SkipChain {
    /// Starts a new chain travelling in `direction`.
    pub fn begin(&mut self, direction: Direction) {
        self.direction = direction;
        self.failures = 0;
    }

    /// Records a failed load and returns the chain length so far.
    pub fn record_failure(&mut self) -> usize {
        self.failures += 1;
        self.failures
    }

    /// Ends the chain after a successful load.
    pub fn reset(&mut self) {
        self.failures = 0;
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Whether all `list_len` files have failed in this chain.
    #[must_use]
    pub fn is_exhausted(&self, list_len: usize) -> bool {
        self.failures >= list_len
    }
}
