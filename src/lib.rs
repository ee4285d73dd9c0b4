//! Tile Typer (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_typer::{core,input,term,types}` and
//! hosts the binary's launch options. The implementation lives in dedicated
//! crates under `crates/`.

pub mod options;

pub use tile_typer_core as core;
pub use tile_typer_input as input;
pub use tile_typer_term as term;
pub use tile_typer_types as types;
