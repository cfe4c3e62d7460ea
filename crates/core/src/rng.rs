//! RNG module - seeded randomness and the color lookahead queue
//!
//! Every random decision of a session (upcoming colors, match precedence) goes
//! through one seeded [`SimpleRng`], so the same seed replays the same game.
//!
//! The lookahead queue shows the player two upcoming colors. Colors are drawn
//! uniformly from `1..num_colors`; there is no bag.

use crate::types::{Cell, LOOKAHEAD};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are the well-mixed ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Upcoming colors: `next` then `next_next`
#[derive(Debug, Clone)]
pub struct ColorQueue {
    slots: [Cell; LOOKAHEAD],
    num_colors: u8,
}

impl ColorQueue {
    /// Create a queue with both slots drawn from `rng`
    ///
    /// `num_colors` counts the empty index, so colors are `1..num_colors`.
    pub fn new(num_colors: u8, rng: &mut SimpleRng) -> Self {
        let mut slots = [0; LOOKAHEAD];
        for slot in &mut slots {
            *slot = random_color(num_colors, rng);
        }
        Self { slots, num_colors }
    }

    /// Upcoming colors without consuming them
    pub fn peek(&self) -> [Cell; LOOKAHEAD] {
        self.slots
    }

    /// Take the front color and refill the back slot
    pub fn draw(&mut self, rng: &mut SimpleRng) -> Cell {
        let front = self.slots[0];
        self.slots.rotate_left(1);
        self.slots[LOOKAHEAD - 1] = random_color(self.num_colors, rng);
        front
    }
}

/// Draw a color uniformly from `1..num_colors`
pub fn random_color(num_colors: u8, rng: &mut SimpleRng) -> Cell {
    let materials = num_colors.saturating_sub(1).max(1) as u32;
    (1 + rng.next_range(materials)) as Cell
}
