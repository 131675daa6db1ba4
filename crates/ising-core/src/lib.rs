//! `ising-core` — foundational types for the 2D Ising sweep workspace.
//!
//! This crate is a dependency of every other `ising-*` crate.  It has no
//! `ising-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`lattice`]     | `Lattice` (`N×N` grid of `±1` spins)                  |
//! | [`neighbors`]   | `NeighborTable`, `Direction` (periodic wraparound)    |
//! | [`pattern`]     | `domain_wall`, `checkerboard`, `Pattern`, `Orientation` |
//! | [`params`]      | `ParameterSet`, `ParameterSetBuilder`, `Persist`      |
//! | [`config`]      | `SweepConfig`, `T_CRITICAL`                           |
//! | [`rng`]         | `EngineRng` (per-engine), `SweepRng` (seed source)    |
//! | [`error`]       | `IsingError`, `IsingResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to lattices, parameter sets, |
//! |         | and the sweep config.  Required by `ising-output`.         |

pub mod config;
pub mod error;
pub mod lattice;
pub mod neighbors;
pub mod params;
pub mod pattern;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SweepConfig, T_CRITICAL};
pub use error::{IsingError, IsingResult};
pub use lattice::{DOWN, Lattice, UP};
pub use neighbors::{Direction, NeighborTable};
pub use params::{ParameterSet, ParameterSetBuilder, Persist};
pub use pattern::{Orientation, Pattern, checkerboard, domain_wall};
pub use rng::{EngineRng, SweepRng};
