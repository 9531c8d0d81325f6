//! Time slider state
//!
//! Owns the current timeline position. Every mutation clamps into the valid
//! range, so out-of-range input from the control surface is corrected at the
//! boundary instead of becoming a runtime error.

use serde::{Deserialize, Serialize};

use crate::index::Timeline;

/// Discrete slider over the positions of a timeline.
///
/// Positions run `0..len`; a navigator over an empty timeline is disabled
/// and pinned at position `0`. A fresh navigator always starts at the
/// earliest date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeNavigator {
    len: usize,
    position: usize,
}

impl TimeNavigator {
    /// Navigator over `len` timeline positions, starting at the earliest
    pub fn new(len: usize) -> Self {
        Self { len, position: 0 }
    }

    /// Navigator sized for `timeline`
    pub fn for_timeline(timeline: &Timeline) -> Self {
        Self::new(timeline.len())
    }

    /// Number of addressable positions
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The control surface is live only when there is something to select
    pub fn enabled(&self) -> bool {
        self.len > 0
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Clamp `position` into the valid range without changing state
    pub fn clamp(&self, position: usize) -> usize {
        if self.len == 0 {
            0
        } else {
            position.min(self.len - 1)
        }
    }

    /// Move to `position`, clamped. Returns the position actually taken.
    pub fn jump_to(&mut self, position: usize) -> usize {
        self.position = self.clamp(position);
        self.position
    }

    /// Advance one position, saturating at the latest date
    pub fn step_forward(&mut self) -> usize {
        self.jump_to(self.position.saturating_add(1))
    }

    /// Go back one position, saturating at the earliest date
    pub fn step_back(&mut self) -> usize {
        self.jump_to(self.position.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateStamp;

    #[test]
    fn test_starts_at_the_earliest_position() {
        let nav = TimeNavigator::new(5);
        assert_eq!(nav.position(), 0);
        assert!(nav.enabled());
    }

    #[test]
    fn test_jump_to_clamps_out_of_range() {
        let mut nav = TimeNavigator::new(3);
        assert_eq!(nav.jump_to(1), 1);
        assert_eq!(nav.jump_to(99), 2);
        assert_eq!(nav.position(), 2);
    }

    #[test]
    fn test_steps_saturate_at_both_ends() {
        let mut nav = TimeNavigator::new(2);
        assert_eq!(nav.step_back(), 0);
        assert_eq!(nav.step_forward(), 1);
        assert_eq!(nav.step_forward(), 1);
    }

    #[test]
    fn test_empty_timeline_is_disabled() {
        let mut nav = TimeNavigator::new(0);
        assert!(!nav.enabled());
        assert_eq!(nav.position(), 0);
        assert_eq!(nav.jump_to(7), 0);
        assert_eq!(nav.step_forward(), 0);
    }

    #[test]
    fn test_for_timeline_takes_the_timeline_length() {
        let timeline = Timeline::from_dates(vec![
            DateStamp::from("2021-01-01"),
            DateStamp::from("2021-02-01"),
        ]);
        let nav = TimeNavigator::for_timeline(&timeline);
        assert_eq!(nav.len(), 2);
        assert!(nav.enabled());
    }
}
