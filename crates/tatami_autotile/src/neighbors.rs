//! Same-kind adjacency flags around a target cell.

use serde::{Deserialize, Serialize};

/// Which of the eight surrounding cells share the target tile's kind.
///
/// Floor shapes read all eight flags. Wall shapes read only the four
/// cardinals, and waterfall shapes only `left` and `right`; the unused flags
/// are simply ignored, so one type can describe every family's neighborhood.
///
/// The packed bit layout used by [`bits`](Self::bits) and
/// [`from_bits`](Self::from_bits):
/// top=0, right=1, bottom=2, left=3,
/// top-left=4, top-right=5, bottom-left=6, bottom-right=7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Neighbors {
    /// No connected neighbors - an isolated cell.
    pub const EMPTY: Self = Self::from_bits(0);

    /// All eight neighbors connected - an interior cell.
    pub const FULL: Self = Self::from_bits(0xff);

    /// A cardinal-only state, as read for wall shapes.
    pub const fn cardinals(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            top_left: false,
            top_right: false,
            bottom_left: false,
            bottom_right: false,
        }
    }

    /// A horizontal-only state, as read for waterfall shapes.
    pub const fn horizontal(left: bool, right: bool) -> Self {
        Self::cardinals(false, right, false, left)
    }

    /// Pack into the canonical bit layout.
    pub const fn bits(self) -> u8 {
        (self.top as u8)
            | (self.right as u8) << 1
            | (self.bottom as u8) << 2
            | (self.left as u8) << 3
            | (self.top_left as u8) << 4
            | (self.top_right as u8) << 5
            | (self.bottom_left as u8) << 6
            | (self.bottom_right as u8) << 7
    }

    /// Unpack from the canonical bit layout.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            top: bits & 1 != 0,
            right: bits & 2 != 0,
            bottom: bits & 4 != 0,
            left: bits & 8 != 0,
            top_left: bits & 16 != 0,
            top_right: bits & 32 != 0,
            bottom_left: bits & 64 != 0,
            bottom_right: bits & 128 != 0,
        }
    }
}
