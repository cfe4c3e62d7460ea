//! Game state module - the placement controller and the session it drives
//!
//! This module ties together all core components: grid, shape library, matcher,
//! RNG and the color queue. It owns every piece of mutable state of a session;
//! the matcher and the grid mutations only borrow it for the duration of a call.
//!
//! # Frame order
//!
//! Player intents are applied through [`GameState::apply_move`] before the frame's
//! [`GameState::tick`]. Each ticked frame then runs, in order:
//!
//! 1. library reshuffle (only when configured)
//! 2. fall timer, stepping the active piece down when it expires
//! 3. one gravity pass over the grid
//! 4. match resolution for every color

use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::library::ShapeLibrary;
use crate::matcher::{resolve_matches, ShapeMatch};
use crate::rng::{random_color, ColorQueue, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// The player-controlled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub color: Cell,
    pub x: i8,
    pub y: i8,
}

/// Shapes removed by one lock or one frame of gravity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveEvent {
    /// The resolution followed a lock (as opposed to a gravity pass)
    pub locked: bool,
    pub cleared: Vec<ShapeMatch>,
    pub frame: u64,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    library: ShapeLibrary,
    grid: Grid,
    active: ActivePiece,
    queue: ColorQueue,
    rng: SimpleRng,
    phase: Phase,
    /// Frames left before the next automatic step down
    fall_timer: u32,
    frame: u64,
    pieces_locked: u32,
    shapes_cleared: u32,
    quit_requested: bool,
    last_event: Option<ResolveEvent>,
}

impl GameState {
    /// Create a session with the canonical shape library
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_library(config, ShapeLibrary::canonical(), seed)
    }

    /// Create a session matching against a custom library
    pub fn with_library(
        config: GameConfig,
        library: ShapeLibrary,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        let library = if config.dedup_library {
            library.deduplicated()
        } else {
            library
        };
        config.validate(&library)?;

        let mut rng = SimpleRng::new(seed);
        let color = random_color(config.num_colors, &mut rng);
        let queue = ColorQueue::new(config.num_colors, &mut rng);

        info!(
            rows = config.rows,
            cols = config.cols,
            colors = config.num_colors,
            shapes = library.len(),
            seed,
            "session started"
        );

        Ok(Self {
            grid: Grid::new(config.rows as usize, config.cols as usize),
            active: ActivePiece {
                color,
                x: config.spawn_x,
                y: config.spawn_y,
            },
            fall_timer: config.fall_interval_frames(),
            config,
            library,
            queue,
            rng,
            phase: Phase::Falling,
            frame: 0,
            pieces_locked: 0,
            shapes_cleared: 0,
            quit_requested: false,
            last_event: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[doc(hidden)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next_queue(&self) -> [Cell; LOOKAHEAD] {
        self.queue.peek()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn shapes_cleared(&self) -> u32 {
        self.shapes_cleared
    }

    /// Take and clear the last resolution event.
    pub fn take_last_event(&mut self) -> Option<ResolveEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next_queue = self.queue.peek();
        out.num_colors = self.config.num_colors;
        out.phase = self.phase;
        out.frame = self.frame;
        out.pieces_locked = self.pieces_locked;
        out.shapes_cleared = self.shapes_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player intent
    ///
    /// Returns whether anything changed. Moves into walls or occupied cells are
    /// ignored, as is every intent but `Quit` once the game is over.
    pub fn apply_move(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Quit => {
                self.quit_requested = true;
                self.end_game("quit");
                true
            }
            _ if self.phase != Phase::Falling => false,
            Intent::MoveLeft => self.try_shift(-1),
            Intent::MoveRight => self.try_shift(1),
            Intent::StepDown => self.step_down(),
        }
    }

    /// Advance the session by `elapsed_steps` frames
    ///
    /// Returns whether the grid or the active piece changed.
    pub fn tick(&mut self, elapsed_steps: u32) -> bool {
        let mut changed = false;

        for _ in 0..elapsed_steps {
            if self.phase.is_terminal() {
                break;
            }
            self.frame = self.frame.wrapping_add(1);

            if self.config.shuffle_library {
                self.library.shuffle(&mut self.rng);
            }

            self.fall_timer = self.fall_timer.saturating_sub(1);
            if self.fall_timer == 0 {
                self.fall_timer = self.config.fall_interval_frames();
                changed |= self.step_down();
                if self.phase.is_terminal() {
                    break;
                }
            }

            let moved = self
                .grid
                .compact_once_around(Some((self.active.x, self.active.y)));
            changed |= moved > 0;

            let cleared = resolve_matches(&mut self.grid, &self.library, self.config.num_colors);
            if !cleared.is_empty() {
                changed = true;
                self.record_clears(cleared, false);
            }
        }

        changed
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let x = self.active.x + dx;
        if !self.grid.is_valid(x, self.active.y) {
            return false;
        }
        self.active.x = x;
        true
    }

    /// Move the active piece down one row, locking it when blocked
    fn step_down(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        let below = self.active.y + 1;
        if self.grid.is_valid(self.active.x, below) {
            self.active.y = below;
            return true;
        }

        if self.active.y == self.config.spawn_y {
            self.end_game("spawn row blocked");
            return true;
        }

        self.lock_piece();
        true
    }

    /// Write the active piece into the grid, resolve matches, spawn the next piece
    fn lock_piece(&mut self) {
        self.phase = Phase::Locked;

        let ActivePiece { color, x, y } = self.active;
        self.grid.set(x, y, color);
        self.pieces_locked += 1;
        debug!(color, x, y, "piece locked");

        let cleared = resolve_matches(&mut self.grid, &self.library, self.config.num_colors);
        self.record_clears(cleared, true);

        self.spawn_piece();
    }

    fn spawn_piece(&mut self) {
        let (x, y) = (self.config.spawn_x, self.config.spawn_y);
        if !self.grid.is_valid(x, y) {
            self.end_game("spawn cell occupied");
            return;
        }

        let color = self.queue.draw(&mut self.rng);
        self.active = ActivePiece { color, x, y };
        self.fall_timer = self.config.fall_interval_frames();
        self.phase = Phase::Falling;
    }

    fn record_clears(&mut self, cleared: Vec<ShapeMatch>, locked: bool) {
        self.shapes_cleared += cleared.len() as u32;
        self.last_event = Some(ResolveEvent {
            locked,
            cleared,
            frame: self.frame,
        });
    }

    fn end_game(&mut self, reason: &str) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = Phase::GameOver;
        info!(
            reason,
            pieces_locked = self.pieces_locked,
            shapes_cleared = self.shapes_cleared,
            frame = self.frame,
            "game over"
        );
    }
}
