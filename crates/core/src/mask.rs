//! Mask module - tetromino shape masks, normalization and rotation
//!
//! A mask is a small row-major boolean grid marking which relative cells belong to
//! a shape. Masks are immutable: normalization and rotation return new masks.
//!
//! Coordinates inside a mask are `(row, col)`, row 0 at the top.

use thiserror::Error;

/// Errors raised while building a mask from raw rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Immutable boolean bounding-box grid of a shape variant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    rows: usize,
    cols: usize,
    /// Row-major order (row * cols + col)
    bits: Vec<bool>,
}

impl ShapeMask {
    /// The canonical 1x1 empty mask
    pub fn empty() -> Self {
        Self {
            rows: 1,
            cols: 1,
            bits: vec![false],
        }
    }

    /// Build a mask from a fixed-size 0/1 table (any non-zero value is set)
    ///
    /// A table with zero rows or columns becomes [`ShapeMask::empty`].
    pub fn from_grid<const R: usize, const C: usize>(table: &[[u8; C]; R]) -> Self {
        if R == 0 || C == 0 {
            return Self::empty();
        }
        Self {
            rows: R,
            cols: C,
            bits: table.iter().flatten().map(|&v| v != 0).collect(),
        }
    }

    /// Build a mask from rows of 0/1 values (any non-zero value is set)
    ///
    /// An input with no rows or no columns becomes [`ShapeMask::empty`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MaskError> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Ok(Self::empty());
        }

        let mut bits = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(MaskError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            bits.extend(values.iter().map(|&v| v != 0));
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (row, col) is part of the shape
    /// Out of bounds reads are `false`
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.bits[row * self.cols + col]
    }

    /// Offsets of every set cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(move |(i, _)| (i / self.cols, i % self.cols))
    }

    pub fn cell_count(&self) -> usize {
        self.bits.iter().filter(|&&set| set).count()
    }

    pub fn is_blank(&self) -> bool {
        !self.bits.iter().any(|&set| set)
    }

    /// Convert back to 0/1 rows (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.bits
            .chunks(self.cols)
            .map(|row| row.iter().map(|&set| set as u8).collect())
            .collect()
    }

    fn row_is_blank(&self, row: usize) -> bool {
        let start = row * self.cols;
        !self.bits[start..start + self.cols].iter().any(|&set| set)
    }

    fn col_is_blank(&self, col: usize) -> bool {
        (0..self.rows).all(|row| !self.bits[row * self.cols + col])
    }
}

/// Trim a mask to its minimal bounding box by stripping trailing empty rows and columns
///
/// Stripping repeats until neither the last row nor the last column is empty.
/// A mask with no set cell normalizes to [`ShapeMask::empty`]. The result is
/// idempotent: `normalize(&normalize(m)) == normalize(m)`.
pub fn normalize(mask: &ShapeMask) -> ShapeMask {
    let mut rows = mask.rows;
    let mut cols = mask.cols;

    loop {
        while rows > 0 && mask_rows_blank(mask, rows - 1, cols) {
            rows -= 1;
        }
        if rows == 0 {
            return ShapeMask::empty();
        }
        if cols > 0 && !mask_col_blank(mask, rows, cols - 1) {
            break;
        }
        cols -= 1;
        if cols == 0 {
            return ShapeMask::empty();
        }
    }

    if rows == mask.rows && cols == mask.cols {
        return mask.clone();
    }

    let mut bits = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let start = row * mask.cols;
        bits.extend_from_slice(&mask.bits[start..start + cols]);
    }
    ShapeMask { rows, cols, bits }
}

/// Row `row` of `mask`, restricted to the first `cols` columns, has no set cell
fn mask_rows_blank(mask: &ShapeMask, row: usize, cols: usize) -> bool {
    if cols == mask.cols {
        return mask.row_is_blank(row);
    }
    let start = row * mask.cols;
    !mask.bits[start..start + cols].iter().any(|&set| set)
}

/// Column `col` of `mask`, restricted to the first `rows` rows, has no set cell
fn mask_col_blank(mask: &ShapeMask, rows: usize, col: usize) -> bool {
    if rows == mask.rows {
        return mask.col_is_blank(col);
    }
    (0..rows).all(|row| !mask.bits[row * mask.cols + col])
}

/// Rotate a mask by a quarter turn, `times` times
///
/// Each turn swaps the dimensions and maps `new[i][j] = old[j][old_cols - 1 - i]`.
/// No normalization happens here; callers normalize separately.
pub fn rotate(mask: &ShapeMask, times: usize) -> ShapeMask {
    let mut current = mask.clone();
    for _ in 0..times % 4 {
        current = quarter_turn(&current);
    }
    current
}

fn quarter_turn(old: &ShapeMask) -> ShapeMask {
    let rows = old.cols;
    let cols = old.rows;
    let mut bits = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            bits.push(old.bits[j * old.cols + (old.cols - 1 - i)]);
        }
    }
    ShapeMask { rows, cols, bits }
}
