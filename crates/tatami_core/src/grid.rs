//! The in-memory tile grid read by the shape resolver.

use serde::{Deserialize, Serialize};

/// A dense tile grid: `layers` planes of `width x height` cells stored in a
/// single flat vector, addressed by `(layer * height + y) * width + x`.
///
/// Tile id 0 is the empty cell. Reads outside the grid yield 0 and writes
/// outside it are dropped, so callers probing neighbors at the map edge never
/// fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    layers: u32,
    tiles: Vec<u32>,
}

impl TileGrid {
    /// Create an empty grid of the given dimensions.
    pub fn new(width: u32, height: u32, layers: u32) -> Self {
        let size = (width * height * layers) as usize;
        Self {
            width,
            height,
            layers,
            tiles: vec![0; size],
        }
    }

    /// Wrap an existing flat tile vector.
    ///
    /// Returns `None` if `tiles.len()` does not equal
    /// `width * height * layers`.
    pub fn from_tiles(tiles: Vec<u32>, width: u32, height: u32, layers: u32) -> Option<Self> {
        if tiles.len() != (width * height * layers) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            layers,
            tiles,
        })
    }

    /// Grid width in cells.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of layers.
    pub const fn layers(&self) -> u32 {
        self.layers
    }

    /// The flat tile vector, row-major within each layer.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// `true` if `(x, y)` lies inside the grid.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Tile id at `(x, y)` on `layer`, or 0 when out of range.
    pub fn tile_id(&self, x: i32, y: i32, layer: u32) -> u32 {
        match self.index(x, y, layer) {
            Some(idx) => self.tiles[idx],
            None => 0,
        }
    }

    /// Store `id` at `(x, y)` on `layer`. Out-of-range writes are dropped.
    pub fn set_tile_id(&mut self, x: i32, y: i32, layer: u32, id: u32) {
        if let Some(idx) = self.index(x, y, layer) {
            self.tiles[idx] = id;
        }
    }

    fn index(&self, x: i32, y: i32, layer: u32) -> Option<usize> {
        if !self.contains(x, y) || layer >= self.layers {
            return None;
        }
        let idx = ((layer * self.height + y as u32) * self.width + x as u32) as usize;
        Some(idx)
    }
}
