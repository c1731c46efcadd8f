use cpdgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On an obstacle-free 4-connected grid this is the exact path cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
