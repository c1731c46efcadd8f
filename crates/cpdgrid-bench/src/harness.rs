use std::fmt;
use std::time::Instant;

use cpdgrid_core::{Point, World};
use cpdgrid_mapgen::{GenError, generate};
use cpdgrid_paths::{
    OracleResult, PathError, PathOracle, ReplayOracle, SearchResult, ShortestPath, validate_path,
};

use crate::config::{BenchConfig, ConfigError};
use crate::record::{BenchmarkRecord, Snapshot, StudyReport};

/// Drives search and oracle over generated worlds and collects timings.
///
/// Every iteration generates its own world and search context and drops them
/// when done; nothing is carried from one size to the next.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    config: BenchConfig,
}

impl BenchmarkHarness {
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Snapshot (if configured) followed by the scalability study.
    pub fn run(&self) -> Result<StudyReport, BenchError> {
        let snapshot = match self.config.snapshot_size {
            Some(n) => {
                let snap = self.snapshot(n)?;
                if !snap.search.found {
                    log::warn!(
                        "snapshot {n}x{n}: no path from {} to {}",
                        snap.start,
                        snap.goal
                    );
                }
                Some(snap)
            }
            None => None,
        };
        let records = self.run_study()?;
        Ok(StudyReport {
            config: self.config.clone(),
            snapshot,
            records,
        })
    }

    /// One record per configured size, in the configured order.
    ///
    /// A size whose goal is unreachable still yields a record, with the
    /// oracle figures left at zero.
    pub fn run_study(&self) -> Result<Vec<BenchmarkRecord>, BenchError> {
        let mut records = Vec::with_capacity(self.config.sizes.len());
        for (i, &n) in self.config.sizes.iter().enumerate() {
            let record = self.measure(n, self.config.study_seed(i))?;
            log::debug!(
                "size {n}: search {:.3} ms ({} visited), oracle {:.4} ms ({} visited), found={}",
                record.search_elapsed_ms,
                record.search_visited,
                record.oracle_elapsed_ms,
                record.oracle_visited,
                record.found
            );
            records.push(record);
        }
        Ok(records)
    }

    /// Time one search and one oracle lookup on a fresh `size`×`size` world.
    pub fn measure(&self, size: i32, seed: u64) -> Result<BenchmarkRecord, BenchError> {
        let world = generate(size, size, self.config.wall_density, seed)?;
        let (start, goal) = corners(&world);
        let mut sp = ShortestPath::new(world.bounds());

        let t0 = Instant::now();
        let search = sp.search(&world, start, goal)?;
        let search_elapsed_ms = elapsed_ms(t0);
        debug_check_optimal(&mut sp, &world, &search, start, goal);

        let (oracle, oracle_elapsed_ms) = if search.found {
            replay_timed(&world, &search, start, goal)?
        } else {
            (OracleResult::default(), 0.0)
        };

        Ok(BenchmarkRecord {
            grid_size: size,
            search_elapsed_ms,
            oracle_elapsed_ms,
            oracle_cost_units: oracle.elapsed_cost_units,
            found: search.found,
            search_visited: search.visited_count(),
            oracle_visited: oracle.visited_count(),
            path_len: search.path.len(),
            wall_cells: world.count_blocked(),
        })
    }

    /// A single corner-to-corner run on a world generated from the base seed,
    /// keeping the world and both results.
    pub fn snapshot(&self, size: i32) -> Result<Snapshot, BenchError> {
        let world = generate(size, size, self.config.wall_density, self.config.seed)?;
        let (start, goal) = corners(&world);
        let mut sp = ShortestPath::new(world.bounds());
        let search = sp.search(&world, start, goal)?;
        debug_check_optimal(&mut sp, &world, &search, start, goal);
        let oracle = if search.found {
            replay_timed(&world, &search, start, goal)?.0
        } else {
            OracleResult::default()
        };
        Ok(Snapshot {
            world,
            start,
            goal,
            search,
            oracle,
        })
    }
}

/// Study `sizes` in order at the given wall density, with the default seed
/// and no snapshot.
pub fn run_scalability_study(
    sizes: &[i32],
    wall_density: f64,
) -> Result<Vec<BenchmarkRecord>, BenchError> {
    let config = BenchConfig {
        sizes: sizes.to_vec(),
        wall_density,
        snapshot_size: None,
        ..Default::default()
    };
    BenchmarkHarness::new(config)?.run_study()
}

fn corners(world: &World) -> (Point, Point) {
    (Point::ZERO, Point::new(world.width() - 1, world.height() - 1))
}

/// In debug builds, compare the search's cost with an exact BFS distance.
fn debug_check_optimal(
    sp: &mut ShortestPath,
    world: &World,
    search: &SearchResult,
    start: Point,
    goal: Point,
) {
    if cfg!(debug_assertions) {
        let exact = sp.distance(world, start, goal);
        debug_assert_eq!(search.cost(), exact, "search from {start} to {goal} is not optimal");
    }
}

/// Load the search's path into a replay oracle and time one lookup.
///
/// Building the oracle stands in for offline precomputation and is not timed.
fn replay_timed(
    world: &World,
    search: &SearchResult,
    start: Point,
    goal: Point,
) -> Result<(OracleResult, f64), BenchError> {
    if cfg!(debug_assertions) {
        validate_path(world, &search.path)?;
    }
    let oracle = ReplayOracle::from_search(search);
    let t0 = Instant::now();
    let result = oracle.lookup(start, goal);
    Ok((result, elapsed_ms(t0)))
}

#[inline]
fn elapsed_ms(t0: Instant) -> f64 {
    t0.elapsed().as_secs_f64() * 1000.0
}

/// Anything that stops a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    Config(ConfigError),
    Gen(GenError),
    Path(PathError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "benchmark config: {e}"),
            Self::Gen(e) => write!(f, "world generation: {e}"),
            Self::Path(e) => write!(f, "path query: {e}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Gen(e) => Some(e),
            Self::Path(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GenError> for BenchError {
    fn from(e: GenError) -> Self {
        Self::Gen(e)
    }
}

impl From<PathError> for BenchError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
