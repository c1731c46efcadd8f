use cpdgrid_core::{Point, Range};

/// A position with an associated cost: one finalized cell of a search, or one
/// entry of a BFS distance map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

/// Per-cell search state: the tentative cost (distance map entry) and the
/// predecessor that produced it.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry. Several entries may exist for the same cell; only the one
/// matching the cell's current cost is live.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first, and
        // among equal costs the earliest pushed entry.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// ShortestPath
// ---------------------------------------------------------------------------

/// Reusable search context for one grid rectangle.
///
/// `ShortestPath` owns the node array, the BFS map and a neighbor scratch
/// buffer so repeated queries on same-sized worlds do not reallocate. A
/// context is meant for a single owner; give each thread or benchmark
/// iteration its own.
pub struct ShortestPath {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    pub(crate) nbuf: Vec<Point>,
}

impl ShortestPath {
    /// Create a new context for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new range fits within the existing capacity only the generation
    /// is bumped, otherwise the caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.bfs_results.clear();

        if new_len <= self.nodes.len() {
            self.next_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Start a new query. Nodes stamped with an older generation count as
    /// untouched, so nothing has to be cleared.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide with the new ones.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }
}
