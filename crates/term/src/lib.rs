//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a `GameSnapshot` into
//! a framebuffer of styled glyphs, and the renderer flushes that framebuffer to
//! the terminal through `crossterm`. Each grid cell is drawn two columns wide to
//! offset the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blicblock_core as core;
pub use tui_blicblock_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_of, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
