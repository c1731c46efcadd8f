//! Random obstacle-grid generation.
//!
//! Worlds are filled by an independent weighted coin flip per cell. The
//! randomness source is always an explicit parameter: either a caller-owned
//! RNG ([`WorldGen::with_rng`]) or a seed ([`WorldGen::seeded`],
//! [`generate`]), so runs are reproducible.

mod walls;

pub use walls::{GenError, WorldGen, generate};
