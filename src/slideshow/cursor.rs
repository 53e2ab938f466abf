// SPDX-License-Identifier: MPL-2.0
//! The playlist cursor: shuffled file list, current position and auto-advance.
//!
//! The cursor never touches the UI. Operations return a [`DisplayRequest`]
//! telling the caller what the viewport should show, and the caller reports
//! back with [`Cursor::display_succeeded`] or [`Cursor::display_failed`].
//! Each request carries a [`LoadTicket`] so late reports for a request that
//! has since been superseded are ignored.

use super::interval::Interval;
use super::skip::SkipChain;
use super::timer::{SlideTimer, TimerGeneration};
use super::Direction;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Where the cursor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No files; nothing displayed, no timer.
    Empty,
    /// Timer armed, auto-advancing.
    Playing,
    /// Timer stopped, manual navigation only.
    Paused,
}

/// Identifies one display request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// What the viewport should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRequest {
    Show { path: PathBuf, ticket: LoadTicket },
    Clear,
}

/// Result of reporting a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipOutcome {
    /// The report was for a superseded request.
    Stale,
    /// Moved on to the next file in the direction of travel.
    Skipped(DisplayRequest),
    /// Every file failed in a row; the viewport should stay empty.
    GaveUp,
}

#[derive(Debug)]
pub struct Cursor {
    files: Vec<PathBuf>,
    index: Option<usize>,
    paused: bool,
    timer: SlideTimer,
    skip: SkipChain,
    outstanding: Option<LoadTicket>,
    next_ticket: u64,
    rng: StdRng,
}

impl Cursor {
    /// Creates an empty cursor with an entropy-seeded shuffle.
    #[must_use]
    pub fn new(interval: Interval) -> Self {
        Self::with_rng(interval, StdRng::from_entropy())
    }

    /// Creates an empty cursor with a reproducible shuffle.
    #[must_use]
    pub fn with_seed(interval: Interval, seed: u64) -> Self {
        Self::with_rng(interval, StdRng::seed_from_u64(seed))
    }

    fn with_rng(interval: Interval, rng: StdRng) -> Self {
        Self {
            files: Vec::new(),
            index: None,
            paused: false,
            timer: SlideTimer::new(interval),
            skip: SkipChain::default(),
            outstanding: None,
            next_ticket: 0,
            rng,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.files.is_empty() {
            PlaybackState::Empty
        } else if self.paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.index
            .and_then(|i| self.files.get(i))
            .map(PathBuf::as_path)
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn timer(&self) -> &SlideTimer {
        &self.timer
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.timer.interval()
    }

    /// Changes the slide interval; a running timer keeps its current period.
    pub fn set_interval(&mut self, interval: Interval) {
        log::info!("slideshow interval set to {} ms", interval.millis());
        self.timer.set_interval(interval);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Replaces the file list, shuffles it and restarts from the first entry.
    ///
    /// A non-empty list always enters `Playing`; an empty one enters `Empty`.
    pub fn rebuild(&mut self, files: Vec<PathBuf>) -> DisplayRequest {
        self.timer.stop();
        self.files = files;
        self.files.shuffle(&mut self.rng);
        self.paused = false;
        self.skip.begin(Direction::Forward);
        log::info!("file list rebuilt with {} entries", self.files.len());

        if self.files.is_empty() {
            self.index = None;
            self.outstanding = None;
            return DisplayRequest::Clear;
        }

        self.index = Some(0);
        let request = self.request_current();
        self.timer.start();
        request
    }

    /// Moves one step in `direction`, wrapping at both ends.
    ///
    /// Returns `None` when the list is empty.
    pub fn advance(&mut self, direction: Direction) -> Option<DisplayRequest> {
        self.skip.begin(direction);
        self.step(direction)
    }

    /// Handles a timer firing. Stale generations and firings while paused are ignored.
    pub fn timer_fired(&mut self, generation: TimerGeneration) -> Option<DisplayRequest> {
        if !self.timer.accepts(generation) || self.state() != PlaybackState::Playing {
            return None;
        }
        self.advance(Direction::Forward)
    }

    /// Toggles `Playing` ⇄ `Paused`. Does nothing while `Empty`.
    pub fn play_pause(&mut self) -> PlaybackState {
        match self.state() {
            PlaybackState::Empty => {}
            PlaybackState::Playing => {
                self.timer.stop();
                self.paused = true;
            }
            PlaybackState::Paused => {
                self.paused = false;
                self.timer.start();
            }
        }
        self.state()
    }

    /// Re-randomizes the order in place; the index value is kept.
    pub fn reshuffle(&mut self) {
        self.files.shuffle(&mut self.rng);
        log::debug!("reshuffled {} entries", self.files.len());
    }

    /// Reports that the request identified by `ticket` was displayed.
    ///
    /// Returns false for a superseded ticket.
    pub fn display_succeeded(&mut self, ticket: LoadTicket) -> bool {
        if self.outstanding != Some(ticket) {
            return false;
        }
        self.outstanding = None;
        self.skip.reset();
        true
    }

    /// Reports that the request identified by `ticket` could not be decoded,
    /// and skips onward in the direction of travel.
    pub fn display_failed(&mut self, ticket: LoadTicket) -> SkipOutcome {
        if self.outstanding != Some(ticket) {
            return SkipOutcome::Stale;
        }
        self.outstanding = None;

        let failures = self.skip.record_failure();
        if self.skip.is_exhausted(self.files.len()) {
            log::warn!("all {} files failed to load in a row, giving up", failures);
            return SkipOutcome::GaveUp;
        }

        match self.step(self.skip.direction()) {
            Some(request) => SkipOutcome::Skipped(request),
            None => SkipOutcome::GaveUp,
        }
    }

    fn step(&mut self, direction: Direction) -> Option<DisplayRequest> {
        self.timer.stop();

        let len = self.files.len();
        if len == 0 {
            return None;
        }

        let index = self.index.unwrap_or(0);
        let next = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        };
        self.index = Some(next);
        log::debug!("cursor moved to {}/{}", next + 1, len);

        let request = self.request_current();
        if !self.paused {
            self.timer.start();
        }
        Some(request)
    }

    fn request_current(&mut self) -> DisplayRequest {
        match self.current().map(Path::to_path_buf) {
            Some(path) => {
                self.next_ticket = self.next_ticket.wrapping_add(1);
                let ticket = LoadTicket(self.next_ticket);
                self.outstanding = Some(ticket);
                DisplayRequest::Show { path, ticket }
            }
            None => {
                self.outstanding = None;
                DisplayRequest::Clear
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn cursor_with(names: &[&str]) -> Cursor {
        let mut cursor = Cursor::with_seed(Interval::new(1000), 7);
        cursor.rebuild(paths(names));
        cursor
    }

    fn ticket_of(request: &DisplayRequest) -> LoadTicket {
        match request {
            DisplayRequest::Show { ticket, .. } => *ticket,
            DisplayRequest::Clear => panic!("expected a Show request"),
        }
    }

    #[test]
    fn new_cursor_is_empty() {
        let cursor = Cursor::new(Interval::default());
        assert_eq!(cursor.state(), PlaybackState::Empty);
        assert!(cursor.index().is_none());
        assert!(!cursor.timer().is_armed());
    }

    #[test]
    fn rebuild_with_files_plays_from_zero() {
        let mut cursor = Cursor::with_seed(Interval::new(1000), 1);
        let request = cursor.rebuild(paths(&["a", "b", "c"]));

        assert_eq!(cursor.state(), PlaybackState::Playing);
        assert_eq!(cursor.index(), Some(0));
        assert!(cursor.timer().is_armed());
        match request {
            DisplayRequest::Show { path, .. } => assert_eq!(Some(path.as_path()), cursor.current()),
            DisplayRequest::Clear => panic!("expected Show"),
        }
    }

    #[test]
    fn rebuild_is_a_permutation() {
        let cursor = cursor_with(&["a", "b", "c", "d"]);
        let mut files = cursor.files().to_vec();
        files.sort();
        assert_eq!(files, paths(&["a", "b", "c", "d"]));
    }

    #[test]
    fn rebuild_with_nothing_goes_empty_and_clears() {
        let mut cursor = cursor_with(&["a", "b"]);
        let request = cursor.rebuild(Vec::new());

        assert_eq!(request, DisplayRequest::Clear);
        assert_eq!(cursor.state(), PlaybackState::Empty);
        assert!(cursor.index().is_none());
        assert!(!cursor.timer().is_armed());
    }

    #[test]
    fn advance_wraps_in_both_directions() {
        let mut cursor = cursor_with(&["a", "b", "c"]);

        cursor.advance(Direction::Backward);
        assert_eq!(cursor.index(), Some(2));

        cursor.advance(Direction::Forward);
        assert_eq!(cursor.index(), Some(0));
    }

    #[test]
    fn advance_on_empty_is_noop() {
        let mut cursor = Cursor::with_seed(Interval::default(), 3);
        assert!(cursor.advance(Direction::Forward).is_none());
        assert_eq!(cursor.state(), PlaybackState::Empty);
    }

    #[test]
    fn advance_restarts_timer_with_fresh_generation() {
        let mut cursor = cursor_with(&["a", "b"]);
        let before = cursor.timer().armed().expect("armed after rebuild");

        cursor.advance(Direction::Forward);
        let after = cursor.timer().armed().expect("still armed while playing");

        assert_ne!(before.generation, after.generation);
    }

    #[test]
    fn advance_while_paused_keeps_timer_stopped() {
        let mut cursor = cursor_with(&["a", "b"]);
        cursor.play_pause();
        cursor.advance(Direction::Forward);

        assert_eq!(cursor.state(), PlaybackState::Paused);
        assert!(!cursor.timer().is_armed());
    }

    #[test]
    fn play_pause_twice_restores_state_with_single_timer() {
        let mut cursor = cursor_with(&["a", "b"]);
        let original = cursor.timer().armed().expect("armed").generation;

        assert_eq!(cursor.play_pause(), PlaybackState::Paused);
        assert!(!cursor.timer().accepts(original));
        assert_eq!(cursor.play_pause(), PlaybackState::Playing);
        assert!(cursor.timer().is_armed());
        assert!(!cursor.timer().accepts(original));
    }

    #[test]
    fn play_pause_on_empty_is_noop() {
        let mut cursor = Cursor::with_seed(Interval::default(), 3);
        assert_eq!(cursor.play_pause(), PlaybackState::Empty);
        assert!(!cursor.timer().is_armed());
    }

    #[test]
    fn timer_fired_advances_only_for_current_generation() {
        let mut cursor = cursor_with(&["a", "b", "c"]);
        let stale = cursor.timer().armed().expect("armed").generation;
        cursor.advance(Direction::Forward);
        assert_eq!(cursor.index(), Some(1));

        assert!(cursor.timer_fired(stale).is_none());
        assert_eq!(cursor.index(), Some(1));

        let current = cursor.timer().armed().expect("armed").generation;
        assert!(cursor.timer_fired(current).is_some());
        assert_eq!(cursor.index(), Some(2));
    }

    #[test]
    fn reshuffle_keeps_index_and_contents() {
        let mut cursor = cursor_with(&["a", "b", "c", "d", "e"]);
        cursor.advance(Direction::Forward);
        cursor.advance(Direction::Forward);

        cursor.reshuffle();

        assert_eq!(cursor.index(), Some(2));
        let mut files = cursor.files().to_vec();
        files.sort();
        assert_eq!(files, paths(&["a", "b", "c", "d", "e"]));
    }

    #[test]
    fn failed_display_skips_in_direction_of_travel() {
        let mut cursor = cursor_with(&["a", "b", "c"]);
        let request = cursor.advance(Direction::Backward).expect("request");
        assert_eq!(cursor.index(), Some(2));

        match cursor.display_failed(ticket_of(&request)) {
            SkipOutcome::Skipped(_) => assert_eq!(cursor.index(), Some(1)),
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn late_report_for_superseded_request_is_stale() {
        let mut cursor = cursor_with(&["a", "b", "c"]);
        let first = cursor.advance(Direction::Forward).expect("request");
        cursor.advance(Direction::Forward);

        assert_eq!(cursor.display_failed(ticket_of(&first)), SkipOutcome::Stale);
        assert!(!cursor.display_succeeded(ticket_of(&first)));
        assert_eq!(cursor.index(), Some(2));
    }

    #[test]
    fn skip_chain_gives_up_after_one_lap() {
        let mut cursor = Cursor::with_seed(Interval::new(1000), 11);
        let mut request = cursor.rebuild(paths(&["a", "b", "c"]));

        for _ in 0..2 {
            match cursor.display_failed(ticket_of(&request)) {
                SkipOutcome::Skipped(next) => request = next,
                other => panic!("expected skip, got {other:?}"),
            }
        }
        assert_eq!(cursor.display_failed(ticket_of(&request)), SkipOutcome::GaveUp);

        // Still playing: the next tick starts a new chain.
        assert_eq!(cursor.state(), PlaybackState::Playing);
        let generation = cursor.timer().armed().expect("armed").generation;
        assert!(cursor.timer_fired(generation).is_some());
    }

    #[test]
    fn success_resets_skip_chain() {
        let mut cursor = cursor_with(&["a", "b", "c"]);
        let request = cursor.advance(Direction::Forward).expect("request");
        let SkipOutcome::Skipped(next) = cursor.display_failed(ticket_of(&request)) else {
            panic!("expected skip");
        };
        assert!(cursor.display_succeeded(ticket_of(&next)));

        // A full lap of failures is needed again before giving up.
        let request = cursor.advance(Direction::Forward).expect("request");
        assert!(matches!(
            cursor.display_failed(ticket_of(&request)),
            SkipOutcome::Skipped(_)
        ));
    }

    #[test]
    fn interval_change_waits_for_next_start() {
        let mut cursor = cursor_with(&["a", "b"]);
        cursor.set_interval(Interval::new(9000));
        assert_eq!(
            cursor.timer().armed().map(|a| a.period.as_millis()),
            Some(1000)
        );

        cursor.advance(Direction::Forward);
        assert_eq!(
            cursor.timer().armed().map(|a| a.period.as_millis()),
            Some(9000)
        );
    }
}
