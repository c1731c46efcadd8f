use cpdgrid_core::{Point, Range, World};

/// Minimal pathfinding interface over a bounded 4-connected grid.
pub trait Pather {
    /// The rectangle every searchable cell lies in.
    fn bounds(&self) -> Range;

    /// Whether a path may step onto `p`. Must be `false` outside [`Pather::bounds`].
    fn passable(&self, p: Point) -> bool;

    /// Append the passable orthogonal neighbors of `p` into `buf`, in
    /// [`Point::neighbors_4`] order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl Pather for World {
    #[inline]
    fn bounds(&self) -> Range {
        World::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_free(p)
    }
}
