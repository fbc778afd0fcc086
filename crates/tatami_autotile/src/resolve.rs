//! Position-based shape resolution over a tile grid.
//!
//! The entry point is [`shape_at`]: given a grid, a position, and the tile id
//! at that position, it probes the surrounding cells for same-kind autotiles
//! and dispatches to the family's shape calculator. [`refresh_region`]
//! applies the resolver across a region after an edit, rewriting the shape
//! slot of every affected autotile id.

use tatami_core::{
    is_autotile, is_tile_a5, is_wall_autotile, is_waterfall, kind_of, make_autotile_id, TileGrid,
};

use crate::{floor_shape, wall_shape, waterfall_shape, Family, Neighbors};

/// Shape family of a tile id, or `None` for ids that do not autotile
/// (non-autotiles and the decorative A5 block).
pub fn family_of(tile_id: u32) -> Option<Family> {
    if !is_autotile(tile_id) || is_tile_a5(tile_id) {
        None
    } else if is_waterfall(tile_id) {
        Some(Family::Waterfall)
    } else if is_wall_autotile(tile_id) {
        Some(Family::Wall)
    } else {
        Some(Family::Floor)
    }
}

/// Resolve the shape for `tile_id` as placed at `(x, y)` on `layer`.
///
/// A neighbor counts as connected when it lies inside the grid and holds an
/// autotile of the same kind; cells off the edge of the map count as
/// disconnected. Ids that do not autotile resolve to 0. Never fails - the
/// worst case for a malformed grid is a plausible but wrong shape.
///
/// `y` grows downward: the `top` neighbor is at `y - 1`.
pub fn shape_at(grid: &TileGrid, x: i32, y: i32, layer: u32, tile_id: u32) -> u32 {
    let Some(family) = family_of(tile_id) else {
        return 0;
    };
    let kind = kind_of(tile_id);
    let same = |dx: i32, dy: i32| {
        let id = grid.tile_id(x + dx, y + dy, layer);
        is_autotile(id) && !is_tile_a5(id) && kind_of(id) == kind
    };

    match family {
        Family::Waterfall => waterfall_shape(same(-1, 0), same(1, 0)),
        Family::Wall => wall_shape(Neighbors::cardinals(
            same(0, -1),
            same(1, 0),
            same(0, 1),
            same(-1, 0),
        )),
        Family::Floor => floor_shape(Neighbors {
            top: same(0, -1),
            right: same(1, 0),
            bottom: same(0, 1),
            left: same(-1, 0),
            top_left: same(-1, -1),
            top_right: same(1, -1),
            bottom_left: same(-1, 1),
            bottom_right: same(1, 1),
        }),
    }
}

/// Re-stamp the shape slot of every autotile id in a region of `layer`.
///
/// The region is expanded by one cell on each side so tiles bordering the
/// edit reconnect too. Resolution reads the pre-refresh ids throughout:
/// updates are collected first and written after the scan, so earlier writes
/// cannot skew later neighbor probes. Shape changes never alter a tile's
/// kind.
pub fn refresh_region(grid: &mut TileGrid, x: i32, y: i32, width: u32, height: u32, layer: u32) {
    let mut updates: Vec<(i32, i32, u32)> = Vec::new();

    for cy in (y - 1)..(y + height as i32 + 1) {
        for cx in (x - 1)..(x + width as i32 + 1) {
            if !grid.contains(cx, cy) {
                continue;
            }
            let id = grid.tile_id(cx, cy, layer);
            if family_of(id).is_none() {
                continue;
            }
            let shape = shape_at(grid, cx, cy, layer, id);
            let new_id = make_autotile_id(kind_of(id), shape);
            if new_id != id {
                updates.push((cx, cy, new_id));
            }
        }
    }

    for (cx, cy, id) in updates {
        grid.set_tile_id(cx, cy, layer, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tatami_core::{shape_of, TILE_ID_A1, TILE_ID_A3, TILE_ID_A5, TILE_ID_MAX};

    /// A single-layer grid filled with one id.
    fn filled_grid(width: u32, height: u32, id: u32) -> TileGrid {
        let mut grid = TileGrid::new(width, height, 1);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.set_tile_id(x, y, 0, id);
            }
        }
        grid
    }

    #[test]
    fn family_dispatch() {
        assert_eq!(family_of(0), None);
        assert_eq!(family_of(TILE_ID_A5), None);
        assert_eq!(family_of(TILE_ID_A1), Some(Family::Floor));
        assert_eq!(family_of(make_autotile_id(5, 0)), Some(Family::Waterfall));
        assert_eq!(family_of(TILE_ID_A3), Some(Family::Wall));
    }

    #[test]
    fn non_autotile_ids_resolve_to_zero() {
        let grid = TileGrid::new(3, 3, 1);
        for id in [0, 1, 1535, TILE_ID_A5, TILE_ID_A1 - 1, TILE_ID_MAX] {
            assert_eq!(shape_at(&grid, 1, 1, 0, id), 0, "id {id}");
        }
    }

    #[test]
    fn surrounded_floor_cell_is_interior() {
        let id = make_autotile_id(20, 0);
        let grid = filled_grid(3, 3, id);
        assert_eq!(shape_at(&grid, 1, 1, 0, id), 0);
    }

    #[test]
    fn checkerboard_center_is_isolated() {
        let center = make_autotile_id(20, 0);
        let other = make_autotile_id(21, 0);
        let mut grid = filled_grid(3, 3, other);
        grid.set_tile_id(1, 1, 0, center);
        assert_eq!(shape_at(&grid, 1, 1, 0, center), 46);
    }

    #[test]
    fn map_corner_counts_edges_as_disconnected() {
        let id = make_autotile_id(20, 0);
        let grid = filled_grid(3, 3, id);
        // Top-left cell: connected right, bottom, bottom-right only.
        // Open top and left edges meet in an outer corner; the bottom-right
        // diagonal is present so no inner corner forms.
        assert_eq!(shape_at(&grid, 0, 0, 0, id), 34);
    }

    #[test]
    fn wall_run_connects_horizontally() {
        let id = TILE_ID_A3;
        let mut grid = TileGrid::new(3, 1, 1);
        for x in 0..3 {
            grid.set_tile_id(x, 0, 0, id);
        }
        // Middle of the run: left and right connected.
        assert_eq!(shape_at(&grid, 1, 0, 0, id), 5);
        // Run ends: one side connected.
        assert_eq!(shape_at(&grid, 0, 0, 0, id), 4);
        assert_eq!(shape_at(&grid, 2, 0, 0, id), 1);
    }

    #[test]
    fn waterfall_reads_banks_only() {
        let fall = make_autotile_id(5, 0);
        let mut grid = filled_grid(3, 3, fall);
        assert_eq!(shape_at(&grid, 1, 1, 0, fall), 0);
        // Removing the banks opens the sides; vertical neighbors are
        // irrelevant.
        grid.set_tile_id(0, 1, 0, 0);
        assert_eq!(shape_at(&grid, 1, 1, 0, fall), 1);
        grid.set_tile_id(2, 1, 0, 0);
        assert_eq!(shape_at(&grid, 1, 1, 0, fall), 3);
    }

    #[test]
    fn layers_are_independent() {
        let id = make_autotile_id(20, 0);
        let mut grid = TileGrid::new(3, 3, 2);
        grid.set_tile_id(1, 1, 1, id);
        // Layer 0 is fully populated, layer 1 holds a single tile.
        for y in 0..3 {
            for x in 0..3 {
                grid.set_tile_id(x, y, 0, id);
            }
        }
        assert_eq!(shape_at(&grid, 1, 1, 1, id), 46);
        assert_eq!(shape_at(&grid, 1, 1, 0, id), 0);
    }

    #[test]
    fn refresh_region_restamps_shapes_in_place() {
        let kind = 20;
        let base = make_autotile_id(kind, 0);
        let mut grid = filled_grid(3, 3, base);
        refresh_region(&mut grid, 0, 0, 3, 3, 0);

        // Center is interior; the top-left corner meets two open edges.
        assert_eq!(shape_of(grid.tile_id(1, 1, 0)), 0);
        assert_eq!(shape_of(grid.tile_id(0, 0, 0)), 34);
        // Kinds never change.
        assert!((0..3).all(|y| (0..3).all(|x| kind_of(grid.tile_id(x, y, 0)) == kind)));
    }

    #[test]
    fn refresh_region_reaches_one_cell_past_the_edit() {
        let kind = 20;
        let base = make_autotile_id(kind, 0);
        let mut grid = filled_grid(5, 1, base);
        refresh_region(&mut grid, 0, 0, 5, 1, 0);
        assert_eq!(shape_of(grid.tile_id(2, 0, 0)), 33);

        // Erase the middle tile and refresh just that cell: both flanking
        // tiles re-resolve through the apron.
        grid.set_tile_id(2, 0, 0, 0);
        refresh_region(&mut grid, 2, 0, 1, 1, 0);
        assert_eq!(shape_of(grid.tile_id(1, 0, 0)), 45);
        assert_eq!(shape_of(grid.tile_id(3, 0, 0)), 43);
    }

    #[test]
    fn random_grids_always_resolve_in_family_range() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..50 {
            let mut grid = TileGrid::new(8, 8, 2);
            for layer in 0..2 {
                for y in 0..8 {
                    for x in 0..8 {
                        grid.set_tile_id(x, y, layer, rng.gen_range(0..TILE_ID_MAX));
                    }
                }
            }
            for layer in 0..2 {
                for y in 0..8 {
                    for x in 0..8 {
                        let id = grid.tile_id(x, y, layer);
                        let shape = shape_at(&grid, x, y, layer, id);
                        let limit = match family_of(id) {
                            None => 1,
                            Some(family) => family.shape_count(),
                        };
                        assert!(shape < limit, "id {id} -> shape {shape}");
                    }
                }
            }
            // Refreshing an arbitrary window must never panic or move a tile
            // out of its family.
            refresh_region(&mut grid, 2, 2, 4, 4, 0);
            for y in 0..8 {
                for x in 0..8 {
                    let id = grid.tile_id(x, y, 0);
                    assert!(id < TILE_ID_MAX);
                }
            }
        }
    }
}
