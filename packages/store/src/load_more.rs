//! # Load-more state machine
//!
//! The directory reveals an already-fetched batch a few cards at a time.
//! [`LoadMore`] tracks how many cards are visible and whether a reveal is in
//! flight:
//!
//! ```text
//!            begin()  [has_more]
//!   Idle ───────────────────────▶ Loading
//!    ▲                               │
//!    └───────── complete() ──────────┘   visible += step
//! ```
//!
//! The delay between `begin` and `complete` is owned by the caller (the view
//! spawns a timer task). `visible` never decreases.

use crate::config::ViewConfig;

/// Phase of the load-more control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadMore {
    visible: usize,
    step: usize,
    phase: LoadPhase,
}

impl Default for LoadMore {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl LoadMore {
    pub fn new(initial_visible: usize, step: usize) -> Self {
        Self {
            visible: initial_visible,
            step,
            phase: LoadPhase::Idle,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.initial_visible, config.load_more_step)
    }

    /// Number of cards currently revealed. May exceed the list length.
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Whether a list of `total` items has items beyond the visible window.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Enter `Loading`. Returns `false` (and changes nothing) when a reveal is
    /// already in flight or nothing remains to reveal.
    pub fn begin(&mut self, total: usize) -> bool {
        if self.is_loading() || !self.has_more(total) {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Finish a reveal started by [`begin`](Self::begin). Ignored when idle.
    pub fn complete(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.visible += self.step;
        self.phase = LoadPhase::Idle;
        true
    }

    /// Abandon an in-flight reveal without growing the window.
    pub fn cancel(&mut self) {
        self.phase = LoadPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let lm = LoadMore::default();
        assert_eq!(lm.visible(), 9);
        assert_eq!(lm.phase(), LoadPhase::Idle);
    }

    #[test]
    fn test_begin_then_complete() {
        let mut lm = LoadMore::new(9, 3);
        assert!(lm.has_more(18));
        assert!(lm.begin(18));
        assert!(lm.is_loading());
        assert_eq!(lm.visible(), 9);

        assert!(lm.complete());
        assert_eq!(lm.visible(), 12);
        assert_eq!(lm.phase(), LoadPhase::Idle);
    }

    #[test]
    fn test_begin_refused_when_nothing_remains() {
        let mut lm = LoadMore::new(9, 3);
        assert!(!lm.begin(9));
        assert!(!lm.begin(4));
        assert!(!lm.is_loading());
        assert_eq!(lm.visible(), 9);
    }

    #[test]
    fn test_double_begin_is_refused() {
        let mut lm = LoadMore::new(9, 3);
        assert!(lm.begin(18));
        assert!(!lm.begin(18));
        lm.complete();
        assert_eq!(lm.visible(), 12);
    }

    #[test]
    fn test_complete_without_begin_is_ignored() {
        let mut lm = LoadMore::new(9, 3);
        assert!(!lm.complete());
        assert_eq!(lm.visible(), 9);
    }

    #[test]
    fn test_visible_only_grows_by_step() {
        let mut lm = LoadMore::new(9, 3);
        let mut previous = lm.visible();
        while lm.begin(18) {
            lm.complete();
            assert_eq!(lm.visible(), previous + 3);
            previous = lm.visible();
        }
        assert_eq!(lm.visible(), 18);
        assert!(!lm.has_more(18));
    }

    #[test]
    fn test_cancel_keeps_window() {
        let mut lm = LoadMore::new(9, 3);
        lm.begin(18);
        lm.cancel();
        assert_eq!(lm.visible(), 9);
        assert!(!lm.complete());
    }
}
