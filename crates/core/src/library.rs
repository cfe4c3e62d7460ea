//! Library module - every rotation of every base shape, normalized
//!
//! The library is built once per session from a list of named base shapes.
//! Each base shape contributes 4 entries, `"<name>-1"` through `"<name>-4"`.
//! Geometrically identical variants (all four entries of the square piece, for
//! instance) are kept unless [`ShapeLibrary::deduplicated`] is used.
//!
//! Entry order matters: the matcher reports the first shape that fits, so
//! shuffling the library changes which of several simultaneous shapes wins.

use crate::mask::{normalize, rotate, ShapeMask};
use crate::rng::SimpleRng;

/// Number of stored variants per base shape
pub const ROTATIONS: usize = 4;

/// A named base shape in its authoring frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseShape {
    pub name: String,
    pub mask: ShapeMask,
}

impl BaseShape {
    pub fn new(name: impl Into<String>, mask: ShapeMask) -> Self {
        Self {
            name: name.into(),
            mask,
        }
    }
}

/// One normalized variant of a base shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Composite id, `"<name>-<n>"`
    pub id: String,
    /// Name of the base shape this variant came from
    pub base: String,
    pub mask: ShapeMask,
}

impl LibraryEntry {
    /// Whether the variant's bounding box fits in a grid of the given size
    pub fn fits_within(&self, rows: usize, cols: usize) -> bool {
        self.mask.rows() <= rows && self.mask.cols() <= cols
    }
}

/// Ordered collection of shape variants
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapeLibrary {
    entries: Vec<LibraryEntry>,
}

impl ShapeLibrary {
    /// Build the library from base shapes
    ///
    /// For each step `n` in `1..=4` the current shape is normalized and stored as
    /// `"<name>-<n>"`, then the normalized shape is rotated `n` quarter turns to
    /// produce the next step. Rotation is therefore cumulative (0, 1, 3, 6 turns).
    pub fn build(base_shapes: &[BaseShape]) -> Self {
        let mut entries = Vec::with_capacity(base_shapes.len() * ROTATIONS);

        for base in base_shapes {
            let mut current = base.mask.clone();
            for step in 1..=ROTATIONS {
                let normalized = normalize(&current);
                entries.push(LibraryEntry {
                    id: format!("{}-{}", base.name, step),
                    base: base.name.clone(),
                    mask: normalized.clone(),
                });
                current = rotate(&normalized, step);
            }
        }

        Self { entries }
    }

    /// The 28-entry library of the 7 canonical pieces
    pub fn canonical() -> Self {
        Self::build(&canonical_shapes())
    }

    /// Drop variants whose mask equals an earlier entry's mask
    pub fn deduplicated(mut self) -> Self {
        let mut kept: Vec<LibraryEntry> = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if !kept.iter().any(|k| k.mask == entry.mask) {
                kept.push(entry);
            }
        }
        self.entries = kept;
        self
    }

    /// Shuffle entry order in place (match precedence)
    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Look up a variant by id
    pub fn get(&self, id: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Names of the base shapes, in first-seen order
    pub fn base_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.base.as_str()) {
                names.push(&entry.base);
            }
        }
        names
    }
}

/// The 7 base pieces in their 4x4 authoring frames
pub fn canonical_shapes() -> Vec<BaseShape> {
    const SHAPES: [(&str, [[u8; 4]; 4]); 7] = [
        (
            "L",
            [[1, 0, 0, 0], [1, 0, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
        ),
        (
            "Lr",
            [[0, 0, 1, 0], [0, 0, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
        ),
        (
            "T",
            [[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        (
            "Z",
            [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        (
            "Zr",
            [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        (
            "O",
            [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        (
            "I",
            [[1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0]],
        ),
    ];

    SHAPES
        .iter()
        .map(|(name, table)| BaseShape::new(*name, ShapeMask::from_grid(table)))
        .collect()
}
