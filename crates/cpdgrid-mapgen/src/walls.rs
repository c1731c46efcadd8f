use std::fmt;

use cpdgrid_core::{Point, Terrain, World};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// World generator driven by a caller-provided RNG.
pub struct WorldGen<R: Rng> {
    pub rng: R,
}

impl WorldGen<StdRng> {
    /// A generator seeded deterministically from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WorldGen<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fill a `width` × `height` world where each cell is blocked with
    /// probability `wall_density`.
    ///
    /// The corners `(0, 0)` and `(width - 1, height - 1)` are always free so
    /// they can serve as search endpoints. Every cell draws one random number,
    /// corners included, so the sequence consumed depends only on the size.
    pub fn walls(&mut self, width: i32, height: i32, wall_density: f64) -> Result<World, GenError> {
        if width <= 0 || height <= 0 {
            return Err(GenError::EmptyWorld { width, height });
        }
        if !(0.0..1.0).contains(&wall_density) {
            return Err(GenError::InvalidDensity(wall_density));
        }

        let goal = Point::new(width - 1, height - 1);
        let rng = &mut self.rng;
        let world = World::from_fn(width, height, |p| {
            let r: f64 = rng.random();
            if p == Point::ZERO || p == goal || r >= wall_density {
                Terrain::Free
            } else {
                Terrain::Blocked
            }
        });
        log::debug!(
            "generated {width}x{height} world, density {wall_density}: {} blocked",
            world.count_blocked()
        );
        Ok(world)
    }
}

/// Generate one world from an explicit seed.
pub fn generate(width: i32, height: i32, wall_density: f64, seed: u64) -> Result<World, GenError> {
    WorldGen::seeded(seed).walls(width, height, wall_density)
}

/// Errors that can occur when generating a world.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// Wall density outside `[0, 1)` or NaN.
    InvalidDensity(f64),
    /// A zero or negative dimension.
    EmptyWorld { width: i32, height: i32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => write!(f, "wall density {d} is outside [0, 1)"),
            Self::EmptyWorld { width, height } => {
                write!(f, "cannot generate a {width}x{height} world")
            }
        }
    }
}

impl std::error::Error for GenError {}
