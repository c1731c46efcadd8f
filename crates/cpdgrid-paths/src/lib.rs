//! Shortest-path search and precomputed-path retrieval on obstacle grids.
//!
//! Two ways of answering the same question are provided:
//!
//! - **Online search**: [`ShortestPath::search`] runs Dijkstra from start to
//!   goal at query time and reports every cell it had to finalize.
//! - **Oracle lookup**: a [`PathOracle`] returns an already-known optimal path
//!   and touches only the cells on it ([`lookup`], [`ReplayOracle`]).
//!
//! [`ShortestPath`] owns and reuses its caches, so repeated queries on
//! same-sized worlds do not reallocate. [`ShortestPath::bfs_map`] gives exact
//! reference distances for checking search results.

mod bfs;
mod context;
mod dijkstra;
mod distance;
mod error;
mod oracle;
mod traits;

pub use context::{PathNode, ShortestPath, UNREACHABLE};
pub use dijkstra::{SearchResult, search};
pub use distance::manhattan;
pub use error::{CellFault, Endpoint, PathError};
pub use oracle::{
    ORACLE_COST_PER_CELL_MS, OracleResult, PathOracle, ReplayOracle, checked_lookup, lookup,
    validate_path,
};
pub use traits::Pather;
