//! Reverse mapping from shape numbers to canonical neighbor states.
//!
//! Editor tooling needs the inverse of the shape calculators: "what must
//! surround this tile for it to show shape S?". There is no closed formula
//! for floor and wall shapes, so the tables are built by exhaustively running
//! the forward calculators over every neighbor state, once, on first use.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{
    floor_shape, wall_shape, Neighbors, FLOOR_SHAPE_COUNT, WALL_SHAPE_COUNT,
    WATERFALL_SHAPE_COUNT,
};

/// The three autotile families with distinct shape enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Family {
    Floor,
    Wall,
    Waterfall,
}

impl Family {
    /// Number of shapes in this family's enumeration.
    pub const fn shape_count(self) -> u32 {
        match self {
            Family::Floor => FLOOR_SHAPE_COUNT,
            Family::Wall => WALL_SHAPE_COUNT,
            Family::Waterfall => WATERFALL_SHAPE_COUNT,
        }
    }
}

/// Canonical neighbor state for a shape.
///
/// Among all neighbor states producing a shape, the canonical one is the
/// most connected: enumeration runs in descending bit order and the first
/// state found for each shape wins, so preview tooling reconstructs the most
/// interior-like surroundings. Shape numbers outside the family's range
/// return the all-false state.
pub fn neighbors_for_shape(shape: u32, family: Family) -> Neighbors {
    match family {
        Family::Floor => copied_or_empty(floor_table(), shape),
        Family::Wall => copied_or_empty(wall_table(), shape),
        Family::Waterfall => {
            if shape < WATERFALL_SHAPE_COUNT {
                // The waterfall shape is its own inverted bitmask.
                Neighbors::horizontal(shape & 1 == 0, shape & 2 == 0)
            } else {
                Neighbors::EMPTY
            }
        }
    }
}

fn copied_or_empty(table: &[Neighbors], shape: u32) -> Neighbors {
    table.get(shape as usize).copied().unwrap_or(Neighbors::EMPTY)
}

fn floor_table() -> &'static [Neighbors; FLOOR_SHAPE_COUNT as usize] {
    static TABLE: OnceLock<[Neighbors; FLOOR_SHAPE_COUNT as usize]> = OnceLock::new();
    TABLE.get_or_init(|| build_table(255, |n| floor_shape(n)))
}

fn wall_table() -> &'static [Neighbors; WALL_SHAPE_COUNT as usize] {
    static TABLE: OnceLock<[Neighbors; WALL_SHAPE_COUNT as usize]> = OnceLock::new();
    TABLE.get_or_init(|| build_table(15, |n| wall_shape(n)))
}

/// Run `shape_fn` over every neighbor state from `max_bits` down to 0 and
/// record the first state seen for each shape.
fn build_table<const N: usize>(max_bits: u8, shape_fn: impl Fn(Neighbors) -> u32) -> [Neighbors; N] {
    let mut table = [Neighbors::EMPTY; N];
    let mut seen = [false; N];
    for bits in (0..=max_bits).rev() {
        let neighbors = Neighbors::from_bits(bits);
        let shape = shape_fn(neighbors) as usize;
        if shape < N && !seen[shape] {
            seen[shape] = true;
            table[shape] = neighbors;
        }
    }
    table
}
