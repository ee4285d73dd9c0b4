//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O beyond reading a word list,
//! making it:
//!
//! - **Deterministic**: Randomness is injected through [`RandomSource`], so the same
//!   seed (or script) produces identical games
//! - **Testable**: Rounds can be injected directly with [`GameState::with_round`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Ticks and clicks do not allocate once the round buffers are warm
//!
//! # Module Structure
//!
//! - [`dictionary`]: word list loading and validation
//! - [`error`]: typed errors for dictionary loading and round construction
//! - [`game_state`]: the engine - round lifecycle, timer, click resolution
//! - [`rng`]: the random source seam plus a seeded LCG and a scripted fake
//! - [`round`]: the word in play and its scattered letter positions
//! - [`scoring`]: points per click and the win threshold
//! - [`snapshot`]: allocation-free, read-only view for the presentation layer
//!
//! # Game Rules
//!
//! - A word is drawn uniformly at random and each letter is placed on a distinct
//!   random cell of the 15x11 board (never on the hint button)
//! - Clicking the next letter scores 50 (100 for the last letter of the word)
//! - Clicking a later letter out of order costs 25 and flags that tile for 2 seconds
//! - Each word has 16 seconds; when the timer runs out a new word is drawn
//! - The hint button reveals the next letter for one click
//! - At 2500 points the game is won and the board is cleared on the next scoring click
//!
//! # Example
//!
//! ```
//! use tile_typer_core::{GameState, SimpleRng};
//! use tile_typer_types::{ClickOutcome, GameAction};
//!
//! let mut game = GameState::from_words(["cat", "dog"], SimpleRng::new(12345)).unwrap();
//!
//! // Click the next expected letter.
//! let next = game.positions()[0];
//! assert_eq!(game.resolve_click(next), ClickOutcome::Correct);
//! assert_eq!(game.score(), 50);
//!
//! // Time passes in milliseconds.
//! game.advance_time(16);
//! assert!(game.apply_action(GameAction::AddTime));
//! ```
//!
//! # Timing
//!
//! All engine time is in milliseconds. The binary drives
//! [`GameState::advance_time`](game_state::GameState::advance_time) with a fixed
//! 16ms tick.

pub mod dictionary;
pub mod error;
mod feedback;
pub mod game_state;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod snapshot;

pub use tile_typer_types as types;

// Re-export commonly used types for convenience
pub use dictionary::Dictionary;
pub use error::{DictionaryError, RoundError};
pub use game_state::GameState;
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use round::{random_position, scatter_positions, Round};
pub use scoring::{apply_score, points_for, ScoreEvent, ScoreResult};
pub use snapshot::{GameSnapshot, TileSnapshot};
