use arrayvec::ArrayVec;

use crate::types::{ClickOutcome, Position, HINT_BUTTON_POSITION, MAX_WORD_LEN, WIN_SCORE};

/// One remaining letter and the cell it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub letter: char,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Remaining letters in click order.
    pub tiles: ArrayVec<TileSnapshot, MAX_WORD_LEN>,
    pub hint_button: Position,
    pub hint_active: bool,
    pub hint_position: Option<Position>,
    pub wrong_click: Option<Position>,
    pub wrong_click_elapsed_ms: u32,
    pub score: i32,
    pub win_score: i32,
    pub time_remaining_ms: u32,
    pub game_id: u32,
    pub round_id: u32,
    pub game_over: bool,
    pub last_outcome: Option<ClickOutcome>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.hint_button = HINT_BUTTON_POSITION;
        self.hint_active = false;
        self.hint_position = None;
        self.wrong_click = None;
        self.wrong_click_elapsed_ms = 0;
        self.score = 0;
        self.win_score = WIN_SCORE;
        self.time_remaining_ms = 0;
        self.game_id = 0;
        self.round_id = 0;
        self.game_over = false;
        self.last_outcome = None;
    }

    /// Whole seconds left on the word timer, rounded up.
    pub fn seconds_remaining(&self) -> u32 {
        self.time_remaining_ms.div_ceil(1000)
    }

    pub fn letters_left(&self) -> usize {
        self.tiles.len()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            tiles: ArrayVec::new(),
            hint_button: HINT_BUTTON_POSITION,
            hint_active: false,
            hint_position: None,
            wrong_click: None,
            wrong_click_elapsed_ms: 0,
            score: 0,
            win_score: WIN_SCORE,
            time_remaining_ms: 0,
            game_id: 0,
            round_id: 0,
            game_over: false,
            last_outcome: None,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let s = GameSnapshot::default();
        assert_eq!(s.letters_left(), 0);
        assert_eq!(s.hint_button, HINT_BUTTON_POSITION);
        assert_eq!(s.win_score, WIN_SCORE);
        assert!(!s.game_over);
    }

    #[test]
    fn test_seconds_round_up() {
        let mut s = GameSnapshot::default();
        s.time_remaining_ms = 16_000;
        assert_eq!(s.seconds_remaining(), 16);
        s.time_remaining_ms = 15_001;
        assert_eq!(s.seconds_remaining(), 16);
        s.time_remaining_ms = 0;
        assert_eq!(s.seconds_remaining(), 0);
    }

    #[test]
    fn test_clear_drops_tiles() {
        let mut s = GameSnapshot::default();
        s.tiles.push(TileSnapshot {
            letter: 'o',
            position: Position::new(2, 2),
        });
        s.score = -25;
        s.game_over = true;
        assert_eq!(s.letters_left(), 1);

        s.clear();
        assert_eq!(s, GameSnapshot::default());
    }
}
