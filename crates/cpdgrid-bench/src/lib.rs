//! Scalability benchmark comparing two ways of retrieving a shortest path on
//! a random obstacle grid:
//!
//! - online Dijkstra search, which explores the grid at query time, and
//! - a precomputed-path oracle, which touches only the cells of the answer.
//!
//! [`BenchmarkHarness`] generates one world per grid size, times both, and
//! returns [`BenchmarkRecord`]s in input order. All results are plain
//! serializable data for external charting.

pub mod config;
pub mod harness;
pub mod record;
pub mod report;

pub use config::{BenchConfig, ConfigError};
pub use harness::{BenchError, BenchmarkHarness, run_scalability_study};
pub use record::{BenchmarkRecord, Efficiency, Snapshot, StudyReport};
pub use report::RecordTable;
