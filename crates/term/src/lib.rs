//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! simple framebuffer that is diffed and flushed to the terminal, and owns the
//! mapping between board cells and screen cells so mouse clicks can be turned
//! back into board positions.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure: `GameView` and `BoardLayout` do no I/O
//! - Allow precise control over aspect ratio (e.g. 4 columns per board cell)

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use tile_typer_core as core;
pub use tile_typer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, TileKind};
pub use layout::{AnchorY, BoardLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
