//! Core data structures for the tatami autotile engine.
//!
//! This crate provides the two things the shape-resolution engine reads:
//! - `tile_id` - the tile-id band constants and kind classification helpers
//! - `TileGrid` - a flat, layered tile grid with edge-safe access
//!
//! It has no rendering or I/O dependencies. It operates on plain tile ids.

mod grid;
pub mod tile_id;

pub use grid::TileGrid;
pub use tile_id::{
    is_autotile, is_same_kind, is_tile_a1, is_tile_a2, is_tile_a3, is_tile_a4, is_tile_a5,
    is_wall_autotile, is_waterfall, kind_of, make_autotile_id, shape_of, TILES_PER_KIND,
    TILE_ID_A1, TILE_ID_A2, TILE_ID_A3, TILE_ID_A4, TILE_ID_A5, TILE_ID_MAX,
};
