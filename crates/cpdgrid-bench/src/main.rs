//! cpdgrid-bench: online search versus precomputed-path lookup.
//!
//! ```bash
//! # Default study (sizes 50..550, 25% walls, seed 42) plus a 550x550 snapshot
//! cpdgrid-bench
//!
//! # Custom sizes, JSON for plotting
//! cpdgrid-bench --sizes 10,20,40 --density 0.2 --no-snapshot --json
//! ```

use clap::Parser;

use cpdgrid_bench::{BenchConfig, BenchmarkHarness};

#[derive(Parser)]
#[command(name = "cpdgrid-bench")]
#[command(about = "Compare Dijkstra search with precomputed-path lookup on random grids")]
struct Args {
    /// Grid sizes to study, in order (N for an NxN grid)
    #[arg(short, long, value_delimiter = ',', value_name = "N,...")]
    sizes: Option<Vec<i32>>,

    /// Probability that a cell is a wall (0.0-1.0, exclusive)
    #[arg(short, long, value_name = "P")]
    density: Option<f64>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Size of the single snapshot run
    #[arg(long, value_name = "N", conflicts_with = "no_snapshot")]
    snapshot: Option<i32>,

    /// Skip the snapshot run
    #[arg(long)]
    no_snapshot: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> BenchConfig {
        let mut config = BenchConfig::default();
        if let Some(sizes) = &self.sizes {
            config.sizes = sizes.clone();
        }
        if let Some(d) = self.density {
            config.wall_density = d;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.no_snapshot {
            config.snapshot_size = None;
        } else if let Some(n) = self.snapshot {
            config.snapshot_size = Some(n);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let harness = BenchmarkHarness::new(args.config())?;
    let report = harness.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
