//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The logical board is a grid of letter tiles:
//!
//! - **Width**: 15 columns (indexed 0-14)
//! - **Height**: 11 rows (indexed 0-10)
//! - **Hint button**: reserved cell (14, 10), never hosts a letter
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `ROUND_TIME_MS` | 16000 | Time allotted to each word |
//! | `WRONG_CLICK_FEEDBACK_MS` | 2000 | How long a mis-clicked tile stays flagged |
//! | `BONUS_TIME_MS` | 3200 | Extra time granted by [`GameAction::AddTime`] |
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Correct letter | +50 |
//! | Last letter of a word | +100 |
//! | Wrong letter | -25 |
//!
//! The game is won once the score reaches [`WIN_SCORE`].
//!
//! # Examples
//!
//! ```
//! use tile_typer_types::{GameAction, Position, GRID_COLUMNS, GRID_ROWS, HINT_BUTTON_POSITION};
//!
//! let p = Position::new(3, 7);
//! assert!(p.in_grid());
//! assert!(!Position::new(15, 0).in_grid());
//!
//! assert_eq!(HINT_BUTTON_POSITION, Position::new(14, 10));
//! assert_eq!(GRID_COLUMNS, 15);
//! assert_eq!(GRID_ROWS, 11);
//!
//! let click = GameAction::Click(p);
//! assert_ne!(click, GameAction::AddTime);
//! ```

use std::fmt;

/// Board width in tiles (15 columns)
pub const GRID_COLUMNS: u8 = 15;

/// Board height in tiles (11 rows)
pub const GRID_ROWS: u8 = 11;

/// Number of cells on the board.
pub const GRID_CELLS: usize = GRID_COLUMNS as usize * GRID_ROWS as usize;

/// The reserved cell that toggles the hint.
pub const HINT_BUTTON_POSITION: Position = Position::new(14, 10);

/// Longest word that fits on the board (every cell except the hint button).
pub const MAX_WORD_LEN: usize = GRID_CELLS - 1;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Time allotted to each word (960 frames at 60 FPS).
pub const ROUND_TIME_MS: u32 = 16_000;

/// Duration a wrong click stays highlighted.
pub const WRONG_CLICK_FEEDBACK_MS: u32 = 2_000;

/// Extra time granted per [`GameAction::AddTime`] (200 frames at the fixed tick).
pub const BONUS_TIME_MS: u32 = 200 * TICK_MS;

/// Score at which the game is won and play stops.
pub const WIN_SCORE: i32 = 2500;

/// Points for a correct letter that does not finish the word.
pub const CORRECT_LETTER_POINTS: i32 = 50;

/// Points for the letter that finishes the word (instead of `CORRECT_LETTER_POINTS`).
pub const WORD_COMPLETE_POINTS: i32 = 100;

/// Points lost for clicking a letter out of order.
pub const WRONG_LETTER_PENALTY: i32 = 25;


/// A cell on the logical board.
///
/// Plain value type independent of any rendering library. Converting to and
/// from screen coordinates is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Whether the position lies on the 15x11 board.
    pub fn in_grid(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_COLUMNS as i16 && self.y < GRID_ROWS as i16
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the input layer and applied through
/// `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Click a board cell
    Click(Position),
    /// Grant extra time to the current word
    AddTime,
    /// Start a fresh game with the same dictionary
    Restart,
}

/// What a single click did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickOutcome {
    /// The next letter was clicked and the word continues.
    Correct,
    /// The last letter was clicked.
    WordComplete,
    /// A remaining letter was clicked out of order.
    Wrong,
    /// The hint button was clicked.
    Hint,
    /// Nothing there.
    Miss,
}

impl ClickOutcome {
    /// Whether the click consumed a letter.
    pub fn advanced(&self) -> bool {
        matches!(self, ClickOutcome::Correct | ClickOutcome::WordComplete)
    }
}
