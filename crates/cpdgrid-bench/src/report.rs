//! Plain-text rendering of a [`StudyReport`] for terminal output.

use std::fmt;

use crate::record::{BenchmarkRecord, Snapshot, StudyReport};

/// Aligned table with one row per record.
#[derive(Debug, Clone, Copy)]
pub struct RecordTable<'a>(pub &'a [BenchmarkRecord]);

impl fmt::Display for RecordTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>7} {:>12} {:>10} {:>12} {:>10} {:>8}",
            "size", "walls", "search ms", "visited", "oracle ms", "visited", "path"
        )?;
        for r in self.0 {
            write!(
                f,
                "{:>6} {:>7} {:>12.3} {:>10} {:>12.4} {:>10} ",
                r.grid_size,
                r.wall_cells,
                r.search_elapsed_ms,
                r.search_visited,
                r.oracle_elapsed_ms,
                r.oracle_visited,
            )?;
            if r.found {
                writeln!(f, "{:>8}", r.path_len)?;
            } else {
                writeln!(f, "{:>8}", "-")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "snapshot {}x{} ({} walls), {} -> {}",
            self.world.width(),
            self.world.height(),
            self.world.count_blocked(),
            self.start,
            self.goal
        )?;
        if !self.search.found {
            return writeln!(
                f,
                "  no path found ({} cells visited)",
                self.search.visited_count()
            );
        }
        let e = self.efficiency();
        write!(
            f,
            "  visited: search {} / oracle {}",
            e.search_visited, e.oracle_visited
        )?;
        if let Some(r) = e.ratio {
            write!(f, " ({r:.1}x)")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  oracle simulated cost: {:.4} ms",
            self.oracle.elapsed_cost_units
        )
    }
}

/// Snapshot summary, efficiency comparison and the study table.
impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(snap) = &self.snapshot {
            writeln!(f, "{snap}")?;
        }
        writeln!(
            f,
            "scalability study, wall density {}, seed {}",
            self.config.wall_density, self.config.seed
        )?;
        write!(f, "{}", RecordTable(&self.records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BenchConfig;
    use cpdgrid_core::{Point, World};
    use cpdgrid_paths::{OracleResult, PathOracle, ReplayOracle, search};

    fn rec(n: i32, found: bool) -> BenchmarkRecord {
        BenchmarkRecord {
            grid_size: n,
            search_elapsed_ms: 1.25,
            oracle_elapsed_ms: 0.0,
            oracle_cost_units: 0.0,
            found,
            search_visited: 90,
            oracle_visited: if found { 19 } else { 0 },
            path_len: if found { 19 } else { 0 },
            wall_cells: 12,
        }
    }

    fn snapshot(layout: &str) -> Snapshot {
        let world = World::parse(layout).unwrap();
        let start = Point::ZERO;
        let goal = Point::new(world.width() - 1, world.height() - 1);
        let result = search(&world, start, goal).unwrap();
        let oracle = if result.found {
            ReplayOracle::from_search(&result).lookup(start, goal)
        } else {
            OracleResult::default()
        };
        Snapshot {
            world,
            start,
            goal,
            search: result,
            oracle,
        }
    }

    #[test]
    fn table_has_header_and_rows() {
        let t = RecordTable(&[rec(10, true), rec(20, false)]).to_string();
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("search ms"));
        assert!(lines[1].trim_start().starts_with("10"));
        assert!(lines[1].ends_with("19"));
        assert!(lines[2].ends_with('-'));
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn report_without_snapshot() {
        let report = StudyReport {
            config: BenchConfig::default(),
            snapshot: None,
            records: vec![rec(10, true)],
        };
        let text = report.to_string();
        assert!(text.starts_with("scalability study, wall density 0.25, seed 42"));
        assert!(!text.contains("snapshot"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn report_with_found_snapshot() {
        let report = StudyReport {
            config: BenchConfig::default(),
            snapshot: Some(snapshot("...\n...\n...")),
            records: vec![rec(10, true)],
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "snapshot 3x3 (0 walls), (0, 0) -> (2, 2)");
        assert_eq!(lines[1], "  visited: search 9 / oracle 5 (1.8x)");
        assert_eq!(lines[2], "  oracle simulated cost: 0.0025 ms");
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("scalability study"));
    }

    #[test]
    fn report_with_unreachable_snapshot() {
        let snap = snapshot(".#.\n#..\n...");
        assert!(!snap.search.found);
        let text = snap.to_string();
        assert!(text.ends_with("  no path found (1 cells visited)\n"));
        assert!(!text.contains("oracle"));
    }
}
