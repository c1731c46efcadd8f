//! Plain-data results handed to reporting and plotting.

use cpdgrid_core::{Point, World};
use cpdgrid_paths::{OracleResult, SearchResult};
use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;

/// Measurements for one grid size of a scalability study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub grid_size: i32,
    /// Wall-clock time of the search call.
    pub search_elapsed_ms: f64,
    /// Wall-clock time of the oracle lookup; zero when no path was found.
    pub oracle_elapsed_ms: f64,
    /// Simulated oracle cost; zero when no path was found.
    pub oracle_cost_units: f64,
    pub found: bool,
    pub search_visited: usize,
    pub oracle_visited: usize,
    pub path_len: usize,
    pub wall_cells: usize,
}

/// One search/oracle pair on a single world, kept whole for heatmap-style
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub world: World,
    pub start: Point,
    pub goal: Point,
    pub search: SearchResult,
    pub oracle: OracleResult,
}

impl Snapshot {
    pub fn efficiency(&self) -> Efficiency {
        Efficiency::new(self.search.visited_count(), self.oracle.visited_count())
    }
}

/// Visited-node counts of a search/oracle pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    pub search_visited: usize,
    pub oracle_visited: usize,
    /// How many times more cells the search touched; `None` if the oracle
    /// touched none.
    pub ratio: Option<f64>,
}

impl Efficiency {
    pub fn new(search_visited: usize, oracle_visited: usize) -> Self {
        let ratio = (oracle_visited > 0).then(|| search_visited as f64 / oracle_visited as f64);
        Self {
            search_visited,
            oracle_visited,
            ratio,
        }
    }
}

/// Everything a full benchmark run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyReport {
    pub config: BenchConfig,
    pub snapshot: Option<Snapshot>,
    pub records: Vec<BenchmarkRecord>,
}

impl StudyReport {
    /// Efficiency of the snapshot run, if there was one.
    pub fn efficiency(&self) -> Option<Efficiency> {
        self.snapshot.as_ref().map(Snapshot::efficiency)
    }

    /// Grid sizes, search times and oracle times as three parallel series.
    pub fn time_series(&self) -> (Vec<i32>, Vec<f64>, Vec<f64>) {
        let sizes = self.records.iter().map(|r| r.grid_size).collect();
        let search = self.records.iter().map(|r| r.search_elapsed_ms).collect();
        let oracle = self.records.iter().map(|r| r.oracle_elapsed_ms).collect();
        (sizes, search, oracle)
    }
}
