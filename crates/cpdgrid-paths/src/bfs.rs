use cpdgrid_core::Point;

use crate::context::{PathNode, ShortestPath, UNREACHABLE};
use crate::traits::Pather;

impl ShortestPath {
    /// Compute a breadth-first distance map from `source`.
    ///
    /// Every step costs 1, so the map holds exact shortest distances. It is
    /// the reference the Dijkstra search is checked against, both in tests and
    /// in debug builds of the benchmark ([`ShortestPath::distance`]).
    ///
    /// The map is built one ring at a time: the returned slice lists reached
    /// nodes grouped by distance, nearest ring first. It is empty if `source`
    /// is outside the range or not passable.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, source: Point) -> &[PathNode] {
        if pather.bounds() != self.rng {
            self.set_range(pather.bounds());
        }
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();

        let Some(si) = self.idx(source) else {
            return &self.bfs_results;
        };
        if !pather.passable(source) {
            return &self.bfs_results;
        }
        self.bfs_map[si] = 0;
        self.bfs_results.push(PathNode {
            pos: source,
            cost: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        // bfs_results[ring] holds the nodes at distance `dist`.
        let mut ring = 0..1;
        let mut dist = 0;
        while !ring.is_empty() {
            dist += 1;
            let ring_end = self.bfs_results.len();
            for i in ring {
                nbuf.clear();
                pather.neighbors(self.bfs_results[i].pos, &mut nbuf);
                for &np in &nbuf {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.bfs_map[ni] == UNREACHABLE {
                        self.bfs_map[ni] = dist;
                        self.bfs_results.push(PathNode { pos: np, cost: dist });
                    }
                }
            }
            ring = ring_end..self.bfs_results.len();
        }
        self.nbuf = nbuf;

        log::trace!(
            "bfs from {source}: reached {} cells, {} rings",
            self.bfs_results.len(),
            dist
        );
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }

    /// Exact number of steps from `from` to `to`, or `None` when `to` cannot
    /// be reached. Runs a full [`bfs_map`](Self::bfs_map) from `from`.
    pub fn distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<i32> {
        self.bfs_map(pather, from);
        Some(self.bfs_at(to)).filter(|&d| d != UNREACHABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use cpdgrid_core::World;

    #[test]
    fn open_world_distances_are_manhattan() {
        let w = World::open(6, 5);
        let mut sp = ShortestPath::new(w.bounds());
        let src = Point::new(2, 1);
        let reached = sp.bfs_map(&w, src).len();
        assert_eq!(reached, 30);
        for p in w.bounds() {
            assert_eq!(sp.bfs_at(p), manhattan(src, p));
        }
    }

    #[test]
    fn walls_split_regions() {
        let w = World::parse(
            "
            ..#..
            ..#..
            ",
        )
        .unwrap();
        let mut sp = ShortestPath::new(w.bounds());
        assert_eq!(sp.bfs_map(&w, Point::new(0, 0)).len(), 4);
        assert_eq!(sp.bfs_at(Point::new(1, 1)), 2);
        assert_eq!(sp.bfs_at(Point::new(3, 0)), UNREACHABLE);
        assert_eq!(sp.bfs_at(Point::new(2, 0)), UNREACHABLE);
        assert_eq!(sp.bfs_at(Point::new(9, 9)), UNREACHABLE);
    }

    #[test]
    fn blocked_or_outside_source_reaches_nothing() {
        let w = World::parse(".#\n..\n").unwrap();
        let mut sp = ShortestPath::new(w.bounds());
        assert!(sp.bfs_map(&w, Point::new(1, 0)).is_empty());
        assert!(sp.bfs_map(&w, Point::new(5, 0)).is_empty());
        assert_eq!(sp.bfs_at(Point::new(0, 0)), UNREACHABLE);
    }

    #[test]
    fn rings_come_out_nearest_first() {
        let w = World::parse(
            "
            ...#....
            .#.#.##.
            .#...#..
            .####.#.
            ........
            ",
        )
        .unwrap();
        let mut sp = ShortestPath::new(w.bounds());
        let nodes = sp.bfs_map(&w, Point::new(0, 0)).to_vec();
        assert_eq!(nodes.len(), w.count_free());
        assert!(
            nodes
                .windows(2)
                .all(|p| p[0].cost <= p[1].cost && p[1].cost <= p[0].cost + 1)
        );
        for n in &nodes {
            assert_eq!(sp.bfs_at(n.pos), n.cost);
        }
        assert_eq!(sp.bfs_at(Point::new(7, 0)), 11);
        assert_eq!(sp.bfs_at(Point::new(7, 4)), 11);
    }

    #[test]
    fn distance_reports_steps_or_none() {
        let w = World::parse(
            "
            ..#..
            ..#..
            ",
        )
        .unwrap();
        let mut sp = ShortestPath::new(w.bounds());
        assert_eq!(sp.distance(&w, Point::new(0, 0), Point::new(1, 1)), Some(2));
        assert_eq!(sp.distance(&w, Point::new(0, 0), Point::new(0, 0)), Some(0));
        assert_eq!(sp.distance(&w, Point::new(0, 0), Point::new(4, 1)), None);
        assert_eq!(sp.distance(&w, Point::new(2, 0), Point::new(0, 0)), None);
    }
}
