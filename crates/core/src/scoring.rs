//! Scoring module - points per click and the win threshold
//!
//! Only letter clicks score. Below [`WIN_SCORE`] a correct letter earns 50, the
//! letter that finishes the word earns 100 instead, and an out-of-order letter
//! costs 25. Once the score has reached the threshold the game is over and any
//! further scoring click clears the board instead of changing the score.

use crate::types::{CORRECT_LETTER_POINTS, WIN_SCORE, WORD_COMPLETE_POINTS, WRONG_LETTER_PENALTY};

/// A click that affects the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// Next letter clicked, word continues
    Correct,
    /// Next letter clicked and it was the last one
    WordComplete,
    /// A later letter clicked out of order
    Wrong,
}

/// Result of applying a [`ScoreEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreResult {
    /// The game is still running; add this delta to the score.
    Awarded(i32),
    /// The score had already reached the threshold; clear the round.
    GameOver,
}

/// Signed point value of an event.
pub fn points_for(event: ScoreEvent) -> i32 {
    match event {
        ScoreEvent::Correct => CORRECT_LETTER_POINTS,
        ScoreEvent::WordComplete => WORD_COMPLETE_POINTS,
        ScoreEvent::Wrong => -WRONG_LETTER_PENALTY,
    }
}

/// Decide what an event does given the current score.
pub fn apply_score(score: i32, event: ScoreEvent) -> ScoreResult {
    if is_won(score) {
        ScoreResult::GameOver
    } else {
        ScoreResult::Awarded(points_for(event))
    }
}

/// Whether `score` has reached the win threshold.
pub fn is_won(score: i32) -> bool {
    score >= WIN_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(points_for(ScoreEvent::Correct), 50);
        assert_eq!(points_for(ScoreEvent::WordComplete), 100);
        assert_eq!(points_for(ScoreEvent::Wrong), -25);
    }

    #[test]
    fn test_scoring_below_threshold() {
        assert_eq!(apply_score(0, ScoreEvent::Correct), ScoreResult::Awarded(50));
        assert_eq!(apply_score(-300, ScoreEvent::Wrong), ScoreResult::Awarded(-25));
        assert_eq!(
            apply_score(2499, ScoreEvent::WordComplete),
            ScoreResult::Awarded(100)
        );
    }

    #[test]
    fn test_scoring_at_or_above_threshold_ends_game() {
        for event in [ScoreEvent::Correct, ScoreEvent::WordComplete, ScoreEvent::Wrong] {
            assert_eq!(apply_score(2500, event), ScoreResult::GameOver);
            assert_eq!(apply_score(2650, event), ScoreResult::GameOver);
        }
    }

    #[test]
    fn test_win_threshold() {
        assert!(!is_won(2499));
        assert!(is_won(2500));
        assert!(!is_won(-25));
    }
}
