//! Tile-id bands and kind classification.
//!
//! Tile ids index into a fixed tileset atlas partitioned into numeric bands:
//! decorative tiles (block A5), animated water and floors (A1), ground (A2),
//! wall sides (A3), and wall tops (A4). Every autotile id additionally encodes
//! a *kind* (which texture variant) and a *shape* (which of the pre-drawn
//! connecting sub-images to show); both are multiple-of-48 arithmetic on the
//! raw id.

/// First tile id of the decorative A5 block. A5 tiles never autotile.
pub const TILE_ID_A5: u32 = 1536;
/// First tile id of the animated water/floor A1 block. This is also the start
/// of the autotile range: every id at or above it (and below
/// [`TILE_ID_MAX`]) is an autotile.
pub const TILE_ID_A1: u32 = 2048;
/// First tile id of the ground A2 block.
pub const TILE_ID_A2: u32 = 2816;
/// First tile id of the wall-side A3 block.
pub const TILE_ID_A3: u32 = 4352;
/// First tile id of the wall-top A4 block.
pub const TILE_ID_A4: u32 = 5888;
/// One past the last valid tile id.
pub const TILE_ID_MAX: u32 = 8192;

/// Number of tile ids reserved per autotile kind - one slot per shape.
pub const TILES_PER_KIND: u32 = 48;

/// `true` if `id` falls in the autotile range (blocks A1 through A4).
pub const fn is_autotile(id: u32) -> bool {
    id >= TILE_ID_A1 && id < TILE_ID_MAX
}

/// `true` if `id` falls in the animated water/floor A1 block.
pub const fn is_tile_a1(id: u32) -> bool {
    id >= TILE_ID_A1 && id < TILE_ID_A2
}

/// `true` if `id` falls in the ground A2 block.
pub const fn is_tile_a2(id: u32) -> bool {
    id >= TILE_ID_A2 && id < TILE_ID_A3
}

/// `true` if `id` falls in the wall-side A3 block.
pub const fn is_tile_a3(id: u32) -> bool {
    id >= TILE_ID_A3 && id < TILE_ID_A4
}

/// `true` if `id` falls in the wall-top A4 block.
pub const fn is_tile_a4(id: u32) -> bool {
    id >= TILE_ID_A4 && id < TILE_ID_MAX
}

/// `true` if `id` falls in the decorative A5 block.
pub const fn is_tile_a5(id: u32) -> bool {
    id >= TILE_ID_A5 && id < TILE_ID_A1
}

/// Texture-variant index of an autotile id.
///
/// The value is meaningful for any id in the autotile range regardless of
/// which block it falls in - kinds are numbered continuously across A1..A4 -
/// but the caller must confirm block membership separately. Ids below
/// [`TILE_ID_A1`] clamp to kind 0.
pub const fn kind_of(id: u32) -> u32 {
    id.saturating_sub(TILE_ID_A1) / TILES_PER_KIND
}

/// Shape slot currently encoded in an autotile id (0-47).
///
/// Ids below [`TILE_ID_A1`] clamp to shape 0, like [`kind_of`].
pub const fn shape_of(id: u32) -> u32 {
    id.saturating_sub(TILE_ID_A1) % TILES_PER_KIND
}

/// Compose an autotile id from a kind and a shape slot.
///
/// Inverse of [`kind_of`] + [`shape_of`] for `shape < 48`.
pub const fn make_autotile_id(kind: u32, shape: u32) -> u32 {
    TILE_ID_A1 + kind * TILES_PER_KIND + shape
}

/// `true` if `id` selects a wall-type autotile.
///
/// Every A3 tile is a wall. The A4 block interleaves wall tops and wall sides
/// in groups of 8 kinds; the odd groups are the wall sides.
pub const fn is_wall_autotile(id: u32) -> bool {
    is_tile_a3(id) || (is_tile_a4(id) && (kind_of(id) / 8) % 2 == 1)
}

/// `true` if `id` selects an animated waterfall autotile.
///
/// The A1 block interleaves still water and waterfalls from kind 4 upward;
/// the odd kinds are the waterfalls.
pub const fn is_waterfall(id: u32) -> bool {
    is_tile_a1(id) && kind_of(id) >= 4 && kind_of(id) % 2 == 1
}

/// `true` if `a` and `b` are autotiles of the same kind.
///
/// This is the adjacency test used for shape resolution: two cells connect
/// exactly when both hold autotiles and their kinds match.
pub const fn is_same_kind(a: u32, b: u32) -> bool {
    is_autotile(a) && is_autotile(b) && kind_of(a) == kind_of(b)
}
