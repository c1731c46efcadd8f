//! **cpdgrid-core** — grid world types shared across the *cpdgrid* crates.
//!
//! This crate provides the cell coordinate ([`Point`]), rectangular bounds
//! ([`Range`]) and the immutable obstacle grid ([`World`]) that the search
//! engine, the path oracle and the benchmark harness all operate on.

pub mod geom;
pub mod world;

pub use geom::{Point, Range, RangeIter};
pub use world::{Terrain, World, WorldError};
