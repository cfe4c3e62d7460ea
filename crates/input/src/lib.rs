//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Intent`]. The game has no
//! rotation and no held-key repeat, so a key press maps to at most one intent and
//! no input state is kept between frames.

pub mod map;

pub use tui_blicblock_types as types;

pub use map::{map_key, should_quit};
