//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the color-matching block game: shape masks and
//! their rotations, the shape library, the colored grid, the shape matcher and the
//! placement controller that drives a session. It has **no dependencies** on
//! terminal I/O; rendering and input live in sibling crates.
//!
//! # Module Structure
//!
//! - [`mask`]: binary shape masks, normalization and quarter-turn rotation
//! - [`library`]: the seven base shapes and their rotation variants
//! - [`grid`]: the colored playfield, shape clearing and one-row gravity
//! - [`matcher`]: first-match search and fixed-point match resolution
//! - [`rng`]: seeded LCG and the two-slot color lookahead
//! - [`config`]: session parameters and their validation
//! - [`game_state`]: the active cell, locking, spawning and frame ticks
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! - A single colored cell falls from the spawn point and can move left, right or down
//! - When it cannot move down it locks into the grid and the next queued color spawns
//! - Any library shape made entirely of one color is removed from the grid
//! - Each frame, every colored cell above an empty cell falls one row
//! - The game ends when the spawn row itself is blocked
//!
//! # Example
//!
//! ```
//! use tui_blicblock_core::{GameConfig, GameState};
//! use tui_blicblock_types::Intent;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! game.apply_move(Intent::MoveRight);
//! game.apply_move(Intent::StepDown);
//! game.tick(1);
//!
//! assert_eq!(game.active().x, 3);
//! assert_eq!(game.active().y, 1);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed frame step. [`GameState::tick`](game_state::GameState::tick)
//! takes a frame count; the active cell steps down every
//! `round(frames_per_second / fall_speed)` frames.

pub mod config;
pub mod game_state;
pub mod grid;
pub mod library;
pub mod mask;
pub mod matcher;
pub mod rng;
pub mod snapshot;

pub use tui_blicblock_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::{ActivePiece, GameState, ResolveEvent};
pub use grid::Grid;
pub use library::{canonical_shapes, BaseShape, LibraryEntry, ShapeLibrary};
pub use mask::{normalize, rotate, MaskError, ShapeMask};
pub use matcher::{find_match, resolve_matches, ShapeMatch};
pub use rng::{ColorQueue, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
