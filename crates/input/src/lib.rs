//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and extracts
//! the screen cell of a left-button press. Turning that cell into a board
//! position is the renderer's job, since only it knows the layout.

pub mod map;

pub use tile_typer_types as types;

pub use map::{handle_key_event, mouse_click, should_quit};
