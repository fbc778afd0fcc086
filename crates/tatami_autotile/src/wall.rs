//! Wall shape calculation via quadrant lookup against a wall atlas.
//!
//! A wall tile's image is assembled from four quadrants, each addressed
//! independently in the 4-wide by 4-tall half-tile space of the wall texture
//! block: connected edges pull from the interior columns and rows, open edges
//! from the rim. Which quadrant composition corresponds to which shape number
//! is atlas-layout data, not something this engine derives - the composition
//! is looked up in a [`WallAtlas`] supplied as configuration.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::Neighbors;

/// Number of distinct wall shapes.
pub const WALL_SHAPE_COUNT: u32 = 16;

/// Quadrant source cells for one wall shape: `[top-left, top-right,
/// bottom-left, bottom-right]`, each an `[x, y]` position in the half-tile
/// space.
pub type WallPieces = [[u8; 2]; 4];

/// The quadrant table of the reference tileset layout.
///
/// Entry `s` is the composition of shape `s`; the ordering encodes
/// connectivity as left=1, top=2, right=4, bottom=8. There is little pattern
/// to exploit here, so the table is spelled out.
pub const CANONICAL_WALL_PIECES: [WallPieces; 16] = [
    [[2, 2], [1, 2], [2, 1], [1, 1]],
    [[0, 2], [1, 2], [0, 1], [1, 1]],
    [[2, 0], [1, 0], [2, 1], [1, 1]],
    [[0, 0], [1, 0], [0, 1], [1, 1]],
    [[2, 2], [3, 2], [2, 1], [3, 1]],
    [[0, 2], [3, 2], [0, 1], [3, 1]],
    [[2, 0], [3, 0], [2, 1], [3, 1]],
    [[0, 0], [3, 0], [0, 1], [3, 1]],
    [[2, 2], [1, 2], [2, 3], [1, 3]],
    [[0, 2], [1, 2], [0, 3], [1, 3]],
    [[2, 0], [1, 0], [2, 3], [1, 3]],
    [[0, 0], [1, 0], [0, 3], [1, 3]],
    [[2, 2], [3, 2], [2, 3], [3, 3]],
    [[0, 2], [3, 2], [0, 3], [3, 3]],
    [[2, 0], [3, 0], [2, 3], [3, 3]],
    [[0, 0], [3, 0], [0, 3], [3, 3]],
];

/// Compose the quadrant coordinates for a cardinal connectivity state.
///
/// Only the four cardinal flags of `n` are read.
pub const fn wall_pieces(n: Neighbors) -> WallPieces {
    let left_x = if n.left { 0 } else { 2 };
    let right_x = if n.right { 3 } else { 1 };
    let top_y = if n.top { 0 } else { 2 };
    let bottom_y = if n.bottom { 3 } else { 1 };
    [
        [left_x, top_y],
        [right_x, top_y],
        [left_x, bottom_y],
        [right_x, bottom_y],
    ]
}

/// A wall atlas: the per-tileset table of quadrant compositions, one entry
/// per wall shape.
///
/// Opaque configuration data describing how the target tileset lays out its
/// wall sub-images. Entry `s` composes shape `s`; 16 entries are expected,
/// and a shorter atlas leaves the missing shapes resolving to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallAtlas {
    /// Stable identifier for this atlas.
    pub id: Uuid,
    pub name: String,
    pub entries: Vec<WallPieces>,
}

impl WallAtlas {
    pub fn new(name: String, entries: Vec<WallPieces>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            entries,
        }
    }

    /// The atlas of the reference tileset layout.
    pub fn canonical() -> Self {
        Self::new("canonical".to_string(), CANONICAL_WALL_PIECES.to_vec())
    }

    /// Parse an atlas from JSON configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`WallAtlasError::Json`] if the text is not a structurally
    /// valid atlas. Entry count is not validated - a short atlas degrades
    /// rather than errors.
    pub fn from_json_str(json: &str) -> Result<Self, WallAtlasError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Error type for wall atlas configuration parsing.
#[derive(Debug, Error)]
pub enum WallAtlasError {
    #[error("Failed to parse wall atlas JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reverse index from quadrant compositions to shape numbers.
///
/// Built once per atlas; lookups are O(1) thereafter. Compositions the atlas
/// does not contain resolve to shape 0 - a caller mid-frame must never fault
/// on an incomplete atlas, a wrong sub-image is the worst case.
#[derive(Debug)]
pub struct WallShapeLookup {
    by_pieces: HashMap<WallPieces, u32>,
}

impl WallShapeLookup {
    /// Index `atlas` by composition. If an atlas repeats a composition, the
    /// first entry wins.
    pub fn new(atlas: &WallAtlas) -> Self {
        let mut by_pieces = HashMap::with_capacity(atlas.entries.len());
        for (shape, pieces) in atlas.entries.iter().enumerate() {
            by_pieces.entry(*pieces).or_insert(shape as u32);
        }
        Self { by_pieces }
    }

    /// Shape number for a cardinal connectivity state, or 0 when the
    /// composition is not in the atlas.
    pub fn shape(&self, n: Neighbors) -> u32 {
        self.by_pieces
            .get(&wall_pieces(n))
            .copied()
            .unwrap_or(0)
    }
}

/// Shape number for a cardinal connectivity state against the canonical
/// atlas.
///
/// The lookup is built on first use and shared for the life of the process.
pub fn wall_shape(n: Neighbors) -> u32 {
    static CANONICAL: OnceLock<WallShapeLookup> = OnceLock::new();
    CANONICAL
        .get_or_init(|| WallShapeLookup::new(&WallAtlas::canonical()))
        .shape(n)
}
