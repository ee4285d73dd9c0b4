//! Hint and wrong-click bookkeeping.

use crate::types::{Position, WRONG_CLICK_FEEDBACK_MS};

/// One-shot hint: set by clicking the hint button, cleared by the next click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintState {
    active: bool,
    position: Option<Position>,
}

impl HintState {
    pub fn active(&self) -> bool {
        self.active
    }

    /// Cached position of the next letter at the time the hint was taken.
    ///
    /// Stays cached after the hint is consumed; only meaningful while `active`.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn activate(&mut self, next: Option<Position>) {
        self.active = true;
        self.position = next;
    }

    pub(crate) fn consume(&mut self) {
        self.active = false;
    }
}

/// Highlight timer for the last out-of-order click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WrongClickFeedback {
    target: Option<Position>,
    elapsed_ms: u32,
}

impl WrongClickFeedback {
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Flag `p`, restarting the window.
    pub(crate) fn flag(&mut self, p: Position) {
        self.target = Some(p);
        self.elapsed_ms = 0;
    }

    /// Run the window forward. Returns true when the highlight expires.
    pub(crate) fn advance(&mut self, dt_ms: u32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= WRONG_CLICK_FEEDBACK_MS {
            *self = Self::default();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_is_one_shot() {
        let mut hint = HintState::default();
        assert!(!hint.active());
        assert_eq!(hint.position(), None);

        hint.activate(Some(Position::new(3, 1)));
        assert!(hint.active());
        assert_eq!(hint.position(), Some(Position::new(3, 1)));

        hint.consume();
        assert!(!hint.active());
    }

    #[test]
    fn test_feedback_expires_after_window() {
        let mut fb = WrongClickFeedback::default();
        assert!(!fb.advance(5_000));

        fb.flag(Position::new(7, 4));
        assert!(!fb.advance(1_000));
        assert_eq!(fb.elapsed_ms(), 1_000);
        assert!(!fb.advance(999));
        assert!(fb.advance(1));
        assert_eq!(fb, WrongClickFeedback::default());
    }

    #[test]
    fn test_reflag_restarts_window() {
        let mut fb = WrongClickFeedback::default();
        fb.flag(Position::new(1, 1));
        fb.advance(1_500);
        fb.flag(Position::new(2, 2));
        assert_eq!(fb.target(), Some(Position::new(2, 2)));
        assert_eq!(fb.elapsed_ms(), 0);
        assert!(!fb.advance(1_500));
        assert!(fb.is_active());
    }
}
