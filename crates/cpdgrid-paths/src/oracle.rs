//! Precomputed-path retrieval.
//!
//! A path oracle answers "what is the optimal path between these two cells"
//! from data prepared ahead of time, touching only the cells of the answer.
//! [`ReplayOracle`] is the simplest such oracle: it holds one already-known
//! optimal path. A real precomputed index (first-move tables and so on) can
//! implement [`PathOracle`] without changing callers.

use std::collections::HashSet;

use cpdgrid_core::Point;

use crate::dijkstra::SearchResult;
use crate::error::{CellFault, PathError};
use crate::traits::Pather;

/// Simulated retrieval cost per path cell, in milliseconds.
pub const ORACLE_COST_PER_CELL_MS: f64 = 0.0005;

/// Outcome of an oracle lookup.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OracleResult {
    /// Cells touched by the lookup, in path order, each once.
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
    /// Simulated cost: a function of path length only.
    pub elapsed_cost_units: f64,
}

impl OracleResult {
    /// The touched cells as a set.
    pub fn visited_set(&self) -> HashSet<Point> {
        self.visited.iter().copied().collect()
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Whether the lookup produced a path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Retrieval of a stored optimal path by its endpoints.
pub trait PathOracle {
    /// Return the stored path from `start` to `goal`, or an empty result if
    /// the oracle knows no such path.
    fn lookup(&self, start: Point, goal: Point) -> OracleResult;
}

/// Report `path` as a precomputed retrieval: each cell is touched once and the
/// cost grows with the path length alone.
pub fn lookup(path: &[Point]) -> OracleResult {
    if path.is_empty() {
        return OracleResult::default();
    }
    let mut seen = HashSet::with_capacity(path.len());
    let visited = path.iter().copied().filter(|p| seen.insert(*p)).collect();
    OracleResult {
        visited,
        path: path.to_vec(),
        elapsed_cost_units: path.len() as f64 * ORACLE_COST_PER_CELL_MS,
    }
}

/// [`lookup`] preceded by [`validate_path`].
pub fn checked_lookup<P: Pather>(pather: &P, path: &[Point]) -> Result<OracleResult, PathError> {
    validate_path(pather, path)?;
    Ok(lookup(path))
}

/// Check that every cell of `path` is in bounds and passable and that
/// consecutive cells are orthogonally adjacent. An empty path is valid.
pub fn validate_path<P: Pather>(pather: &P, path: &[Point]) -> Result<(), PathError> {
    let bounds = pather.bounds();
    let mut prev: Option<Point> = None;
    for (index, &pos) in path.iter().enumerate() {
        let fault = if !bounds.contains(pos) {
            Some(CellFault::OutOfBounds)
        } else if !pather.passable(pos) {
            Some(CellFault::Blocked)
        } else {
            prev.filter(|q| !q.is_adjacent_4(pos))
                .map(|q| CellFault::NotAdjacent { prev: q })
        };
        if let Some(fault) = fault {
            return Err(PathError::InvalidPath { index, pos, fault });
        }
        prev = Some(pos);
    }
    Ok(())
}

/// An oracle that replays a single known path.
///
/// This stands in for a real precomputed index: it is fed the result of an
/// online search instead of being built offline.
#[derive(Debug, Clone, Default)]
pub struct ReplayOracle {
    path: Vec<Point>,
}

impl ReplayOracle {
    /// Store `path` without checking it.
    pub fn new(path: Vec<Point>) -> Self {
        Self { path }
    }

    /// Store `path` after [`validate_path`].
    pub fn checked<P: Pather>(pather: &P, path: Vec<Point>) -> Result<Self, PathError> {
        validate_path(pather, &path)?;
        Ok(Self { path })
    }

    /// Store the path of a search; empty when the search found nothing.
    pub fn from_search(result: &SearchResult) -> Self {
        Self::new(result.path.clone())
    }

    /// The stored path.
    pub fn path(&self) -> &[Point] {
        &self.path
    }
}

impl PathOracle for ReplayOracle {
    fn lookup(&self, start: Point, goal: Point) -> OracleResult {
        if self.path.first() == Some(&start) && self.path.last() == Some(&goal) {
            lookup(&self.path)
        } else {
            OracleResult::default()
        }
    }
}
