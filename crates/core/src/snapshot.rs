use crate::game_state::ActivePiece;
use crate::types::{Cell, Phase, LOOKAHEAD};

/// Read-only view of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub color: Cell,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the render collaborator needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major copy of the grid
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next_queue: [Cell; LOOKAHEAD],
    pub num_colors: u8,
    pub phase: Phase,
    pub frame: u64,
    pub pieces_locked: u32,
    pub shapes_cleared: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.grid.clear();
        self.active = None;
        self.next_queue = [0; LOOKAHEAD];
        self.num_colors = 0;
        self.phase = Phase::Falling;
        self.frame = 0;
        self.pieces_locked = 0;
        self.shapes_cleared = 0;
    }

    /// Cell at (row, col), `None` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.grid.get(row * self.cols + col).copied()
    }

    pub fn playable(&self) -> bool {
        !self.phase.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            next_queue: [0; LOOKAHEAD],
            num_colors: 0,
            phase: Phase::Falling,
            frame: 0,
            pieces_locked: 0,
            shapes_cleared: 0,
        }
    }
}
