//! Floor shape calculation from eight adjacency flags.
//!
//! Floor autotiles draw from a set of 47 pre-composed shapes: 16 inner-corner
//! combinations for fully connected cells, 16 single-edge shapes, 10
//! two-edge shapes, 4 three-edge shapes, and the isolated shape. The mapping
//! from an adjacency state to a shape number is an irregular, hand-designed
//! enumeration, so it is written out as an explicit branch table rather than
//! derived from a formula.

use crate::Neighbors;

/// Number of distinct floor shapes.
pub const FLOOR_SHAPE_COUNT: u32 = 47;

/// Map a floor tile's adjacency state to its shape number (0-46).
///
/// Total over all 256 flag combinations: diagonal flags are read even when
/// they cannot co-occur with the given cardinals on a real map, and the
/// result is always in range. Fully connected cells resolve to 0, fully
/// isolated cells to 46.
pub fn floor_shape(n: Neighbors) -> u32 {
    // An inner corner sits at a diagonal whose two adjacent edges connect
    // while the diagonal itself does not.
    let corner_tl = u32::from(n.top && n.left && !n.top_left);
    let corner_tr = u32::from(n.top && n.right && !n.top_right);
    let corner_bl = u32::from(n.bottom && n.left && !n.bottom_left);
    let corner_br = u32::from(n.bottom && n.right && !n.bottom_right);

    let open_edges =
        u32::from(!n.top) + u32::from(!n.right) + u32::from(!n.bottom) + u32::from(!n.left);

    match open_edges {
        // Fully connected: one shape per inner-corner combination.
        0 => corner_tl + corner_tr * 2 + corner_br * 4 + corner_bl * 8,

        // One open edge: four shapes per direction, sub-indexed by the two
        // inner corners the remaining edges can still form.
        1 => {
            if !n.left {
                16 + corner_tr + corner_br * 2
            } else if !n.top {
                20 + corner_br + corner_bl * 2
            } else if !n.right {
                24 + corner_bl + corner_tl * 2
            } else {
                28 + corner_tl + corner_tr * 2
            }
        }

        // Two open edges: a straight run when they oppose, an outer corner
        // with one possible inner corner when they meet.
        2 => {
            if !n.left && !n.right {
                32
            } else if !n.top && !n.bottom {
                33
            } else if !n.top && !n.left {
                34 + corner_br
            } else if !n.top && !n.right {
                36 + corner_bl
            } else if !n.right && !n.bottom {
                38 + corner_tl
            } else {
                40 + corner_tr
            }
        }

        // Three open edges: a dead end pointing toward the one connection.
        3 => {
            if n.bottom {
                42
            } else if n.right {
                43
            } else if n.top {
                44
            } else {
                45
            }
        }

        // Four open edges: isolated.
        _ => 46,
    }
}
