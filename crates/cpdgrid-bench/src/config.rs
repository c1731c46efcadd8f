use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameters of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Grid sizes to study, processed in this order. Each `N` means an
    /// `N`×`N` world searched from `(0, 0)` to `(N-1, N-1)`.
    pub sizes: Vec<i32>,
    /// Independent per-cell probability of a wall, in `[0, 1)`.
    pub wall_density: f64,
    /// Base seed. The snapshot world and study size `i` use `seed + i`
    /// (wrapping), so the snapshot shares its world with the first size
    /// when both have the same dimensions.
    pub seed: u64,
    /// Size of the single snapshot run, if any.
    pub snapshot_size: Option<i32>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 100, 200, 300, 400, 500, 550],
            wall_density: 0.25,
            seed: 42,
            snapshot_size: Some(550),
        }
    }
}

impl BenchConfig {
    /// Check the parameters before any world is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if let Some(&bad) = self.sizes.iter().find(|&&n| n < 1) {
            return Err(ConfigError::InvalidSize(bad));
        }
        if let Some(n) = self.snapshot_size.filter(|&n| n < 1) {
            return Err(ConfigError::InvalidSize(n));
        }
        if !(0.0..1.0).contains(&self.wall_density) {
            return Err(ConfigError::InvalidDensity(self.wall_density));
        }
        Ok(())
    }

    /// Seed for the world of study iteration `index`.
    #[inline]
    pub fn study_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Rejected benchmark parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NoSizes,
    InvalidSize(i32),
    InvalidDensity(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSizes => f.write_str("no grid sizes given"),
            Self::InvalidSize(n) => write!(f, "grid size {n} must be at least 1"),
            Self::InvalidDensity(d) => write!(f, "wall density {d} is outside [0, 1)"),
        }
    }
}

impl std::error::Error for ConfigError {}
