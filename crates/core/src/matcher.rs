//! Matcher module - finds single-colored library shapes on the grid
//!
//! A shape matches at origin (row, col) when every set cell of its mask lands on
//! a grid cell of exactly the requested color. Unset mask cells impose nothing.
//!
//! Scan order is part of the contract: library entries in their current order,
//! and within one entry, origins row-major. The first hit wins.

use tracing::debug;

use crate::grid::Grid;
use crate::library::ShapeLibrary;
use crate::mask::ShapeMask;
use crate::types::{Cell, EMPTY};

/// A shape found on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMatch {
    /// Position of the entry in the library at the time of the scan
    pub index: usize,
    /// Library id, `"<name>-<n>"`
    pub id: String,
    pub color: Cell,
    /// Origin of the mask's top-left corner
    pub row: usize,
    pub col: usize,
}

/// Find the first library shape made entirely of `color`
///
/// Returns `None` for the empty color and when no entry fits anywhere.
/// Entries with no set cell never match.
pub fn find_match(grid: &Grid, color: Cell, library: &ShapeLibrary) -> Option<ShapeMatch> {
    if color == EMPTY {
        return None;
    }

    library.iter().enumerate().find_map(|(index, entry)| {
        find_origin(grid, color, &entry.mask).map(|(row, col)| ShapeMatch {
            index,
            id: entry.id.clone(),
            color,
            row,
            col,
        })
    })
}

/// First origin, row-major, where `mask` sits on cells of `color`
pub fn find_origin(grid: &Grid, color: Cell, mask: &ShapeMask) -> Option<(usize, usize)> {
    if mask.is_blank() || mask.rows() > grid.rows() || mask.cols() > grid.cols() {
        return None;
    }

    for row in 0..=grid.rows() - mask.rows() {
        for col in 0..=grid.cols() - mask.cols() {
            if mask
                .cells()
                .all(|(dr, dc)| grid.at(row + dr, col + dc) == color)
            {
                return Some((row, col));
            }
        }
    }
    None
}

/// Find and clear shapes until no color has a match left
///
/// Colors `1..num_colors` are swept in order; each hit is cleared immediately and
/// the sweep starts over, so a clear can never hide a match from a later color.
/// Returns the clears in the order they happened.
pub fn resolve_matches(grid: &mut Grid, library: &ShapeLibrary, num_colors: u8) -> Vec<ShapeMatch> {
    let mut cleared = Vec::new();

    loop {
        let hit = (1..num_colors).find_map(|color| find_match(&*grid, color, library));
        let Some(found) = hit else {
            break;
        };

        let mask = &library.entries()[found.index].mask;
        let emptied = grid.clear_shape(mask, found.row, found.col);
        debug!(
            shape = %found.id,
            color = found.color,
            row = found.row,
            col = found.col,
            emptied,
            "shape cleared"
        );
        cleared.push(found);
    }

    cleared
}
