use std::collections::{BinaryHeap, HashSet};

use cpdgrid_core::{Point, World};

use crate::context::{NodeRef, PathNode, ShortestPath, UNREACHABLE};
use crate::error::{CellFault, Endpoint, PathError};
use crate::traits::Pather;

/// Every orthogonal step costs the same.
const STEP_COST: i32 = 1;

/// Outcome of a single start-to-goal search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Every finalized cell, in finalization order, with its optimal cost.
    /// A cell appears at most once.
    pub visited: Vec<PathNode>,
    /// Start to goal inclusive; empty when the goal is unreachable.
    pub path: Vec<Point>,
    pub found: bool,
}

impl SearchResult {
    /// The finalized cells as a set.
    pub fn visited_set(&self) -> HashSet<Point> {
        self.visited.iter().map(|n| n.pos).collect()
    }

    /// Number of finalized cells.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of steps on the path, or `None` when no path was found.
    pub fn cost(&self) -> Option<i32> {
        if !self.found {
            return None;
        }
        Some(self.path.len() as i32 - 1)
    }
}

impl ShortestPath {
    /// Compute a shortest path from `start` to `goal` with Dijkstra's
    /// algorithm.
    ///
    /// Both endpoints must be in bounds and passable, otherwise
    /// [`PathError::InvalidEndpoint`] is returned. An unreachable goal yields
    /// `found == false`, an empty path, and every cell reachable from `start`
    /// in `visited`.
    ///
    /// Frontier ties are broken by push order, so identical inputs produce
    /// identical results. Superseded frontier entries stay in the heap and are
    /// skipped when popped.
    pub fn search<P: Pather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, PathError> {
        if pather.bounds() != self.rng {
            self.set_range(pather.bounds());
        }
        let start_idx = self.endpoint_idx(pather, Endpoint::Start, start)?;
        let goal_idx = self.endpoint_idx(pather, Endpoint::Goal, goal)?;

        let cur_gen = self.next_generation();
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            cost: 0,
            seq,
        });

        let mut visited = Vec::new();
        let mut stale = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open || current.cost > cn.g {
                stale += 1;
                continue;
            }
            self.nodes[ci].open = false;

            let cp = self.point(ci);
            visited.push(PathNode {
                pos: cp,
                cost: current.cost,
            });
            if ci == goal_idx {
                break 'search true;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current.cost + STEP_COST;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative;
                n.parent = ci;
                n.open = true;
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        let path = if found {
            self.reconstruct(goal_idx)
        } else {
            Vec::new()
        };
        log::debug!(
            "dijkstra {start} -> {goal}: found={found} visited={} pushes={} stale={stale} path_len={}",
            visited.len(),
            seq + 1,
            path.len()
        );

        Ok(SearchResult {
            visited,
            path,
            found,
        })
    }

    fn endpoint_idx<P: Pather>(
        &self,
        pather: &P,
        endpoint: Endpoint,
        pos: Point,
    ) -> Result<usize, PathError> {
        let Some(i) = self.idx(pos) else {
            return Err(PathError::InvalidEndpoint {
                endpoint,
                pos,
                fault: CellFault::OutOfBounds,
            });
        };
        if !pather.passable(pos) {
            return Err(PathError::InvalidEndpoint {
                endpoint,
                pos,
                fault: CellFault::Blocked,
            });
        }
        Ok(i)
    }

    /// Walk predecessors back from `goal_idx` to the start, then reverse.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

/// Search `world` with a fresh [`ShortestPath`] context.
pub fn search(world: &World, start: Point, goal: Point) -> Result<SearchResult, PathError> {
    ShortestPath::new(world.bounds()).search(world, start, goal)
}
