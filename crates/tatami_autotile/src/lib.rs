//! Autotile shape resolution for tatami maps.
//!
//! Given a tile's kind and the kinds of the up-to-eight surrounding cells,
//! this crate decides which of a small fixed set of pre-drawn sub-tile
//! images ("shapes") to show so that terrain edges and corners connect
//! seamlessly: 47 floor shapes, 16 wall shapes, and 4 waterfall shapes.
//!
//! Every shape function is total - any combination of adjacency flags, any
//! tile id, and any grid position produces a valid shape number. There is no
//! error channel; malformed input degrades to a plausible default shape
//! instead of faulting a caller mid-frame.
//!
//! The primary entry points are [`shape_at`] (resolve one grid position),
//! [`refresh_region`] (re-stamp a region after an edit), and
//! [`neighbors_for_shape`] (reconstruct the canonical surroundings of a
//! shape, for preview tooling).
//!
//! This crate has no rendering dependency. It operates on plain tile ids
//! from `tatami_core`.
//!
//! # Example
//!
//! ```
//! use tatami_autotile::{floor_shape, shape_at, Neighbors};
//! use tatami_core::{make_autotile_id, TileGrid};
//!
//! // A lone grass tile on an empty map shows the isolated shape.
//! let grass = make_autotile_id(20, 0);
//! let mut grid = TileGrid::new(3, 3, 1);
//! grid.set_tile_id(1, 1, 0, grass);
//! assert_eq!(shape_at(&grid, 1, 1, 0, grass), 46);
//!
//! // The same answer, computed from explicit adjacency flags.
//! assert_eq!(floor_shape(Neighbors::EMPTY), 46);
//! ```

mod floor;
mod neighbors;
mod resolve;
mod reverse;
mod wall;
mod waterfall;

pub use floor::{floor_shape, FLOOR_SHAPE_COUNT};
pub use neighbors::Neighbors;
pub use resolve::{family_of, refresh_region, shape_at};
pub use reverse::{neighbors_for_shape, Family};
pub use wall::{
    wall_pieces, wall_shape, WallAtlas, WallAtlasError, WallPieces, WallShapeLookup,
    CANONICAL_WALL_PIECES, WALL_SHAPE_COUNT,
};
pub use waterfall::{waterfall_shape, WATERFALL_SHAPE_COUNT};
