//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The default playfield is deliberately tiny:
//!
//! - **Rows**: 7 (indexed 0-6, top to bottom)
//! - **Columns**: 5 (indexed 0-4, left to right)
//! - **Spawn position**: (x=2, y=0)
//!
//! Dimensions are only defaults; a session can be configured with any grid that
//! still fits every base shape in at least one rotation.
//!
//! # Colors
//!
//! A cell holds a color index. `0` is empty, `1..NUM_COLORS` are materials. The
//! default palette has 6 materials, so `DEFAULT_NUM_COLORS` is 7.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAMES_PER_SECOND` | 30 | Fixed frame rate of the game loop |
//! | `DEFAULT_FALL_SPEED` | 2 | Automatic steps down per second |
//!
//! The fall timer counts frames: `round(fps / fall_speed)` frames per step.
//!
//! # Examples
//!
//! ```
//! use tui_blicblock_types::{Intent, Phase, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let intent = Intent::from_str("moveLeft").unwrap();
//! assert_eq!(intent, Intent::MoveLeft);
//! assert_eq!(intent.as_str(), "moveLeft");
//!
//! assert!(Phase::GameOver.is_terminal());
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLS), (7, 5));
//! ```

/// Default grid height in cells (7 rows)
pub const DEFAULT_ROWS: u8 = 7;

/// Default grid width in cells (5 columns)
pub const DEFAULT_COLS: u8 = 5;

/// Default number of color indices, including the empty index 0
pub const DEFAULT_NUM_COLORS: u8 = 7;

/// Default automatic fall speed (steps down per second)
pub const DEFAULT_FALL_SPEED: u32 = 2;

/// Default frame rate of the game loop
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 30;

/// Default spawn column of the active piece
pub const DEFAULT_SPAWN_X: i8 = 2;

/// Default spawn row of the active piece
pub const DEFAULT_SPAWN_Y: i8 = 0;

/// Number of upcoming colors shown to the player
pub const LOOKAHEAD: usize = 2;

/// Highest frame rate accepted by a session (one frame per millisecond)
pub const MAX_FRAMES_PER_SECOND: u32 = 1000;

/// Largest grid edge accepted by a session
pub const MAX_GRID_EDGE: u8 = 64;

/// A cell on the grid: a color index, `EMPTY` when nothing is there
pub type Cell = u8;

/// The empty color index
pub const EMPTY: Cell = 0;


/// Discrete player intents supplied by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move the active piece one cell left
    MoveLeft,
    /// Move the active piece one cell right
    MoveRight,
    /// Move the active piece one cell down, locking it when blocked
    StepDown,
    /// End the session
    Quit,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blicblock_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("stepdown"), Some(Intent::StepDown));
    /// assert_eq!(Intent::from_str("QUIT"), Some(Intent::Quit));
    /// assert_eq!(Intent::from_str("rotate"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "stepdown" => Some(Intent::StepDown),
            "quit" => Some(Intent::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::StepDown => "stepDown",
            Intent::Quit => "quit",
        }
    }
}

/// Placement controller states
///
/// - **Falling**: the active piece is descending and accepts moves
/// - **Locked**: the piece was just written to the grid, matches are being resolved
/// - **GameOver**: terminal, no further moves are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Locked,
    GameOver,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Falling => "falling",
            Phase::Locked => "locked",
            Phase::GameOver => "gameOver",
        }
    }
}
