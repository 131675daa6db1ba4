//! Deterministic per-engine and sweep-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every Simulation Engine owns its own `SmallRng`; nothing is global.  A
//! sweep derives one seed per task from its master seed:
//!
//!   seed = master_seed XOR ((task_index + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive task indices uniformly across the seed space.
//! This means:
//!
//! - Workers never share RNG state (no contention, no cross-worker correlation).
//! - Appending temperatures to a sweep does not disturb the seeds of the
//!   existing tasks.
//! - A single engine run is reproducible given its seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── EngineRng ─────────────────────────────────────────────────────────────────

/// Random source owned privately by one Simulation Engine.
///
/// Not `Clone`: two engines must never replay the same stream by accident.
#[derive(Debug)]
pub struct EngineRng(SmallRng);

impl EngineRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        EngineRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source (non-reproducible).
    pub fn from_entropy() -> Self {
        EngineRng(SmallRng::from_entropy())
    }

    /// Seed from `seed` when given, from entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Uniform index in `0..n`.
    #[inline]
    pub fn index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// A fair coin: `+1` or `-1` with equal probability.
    #[inline]
    pub fn spin(&mut self) -> i8 {
        if self.0.r#gen::<bool>() { 1 } else { -1 }
    }
}

// ── SweepRng ──────────────────────────────────────────────────────────────────

/// Sweep-level seed source, used only by the orchestrating thread to hand
/// out per-task seeds before dispatch.
#[derive(Debug, Clone, Copy)]
pub struct SweepRng {
    master: u64,
}

impl SweepRng {
    pub fn new(master: u64) -> Self {
        SweepRng { master }
    }

    /// Seed for task number `index`; stable for a given master seed.
    #[inline]
    pub fn task_seed(&self, index: usize) -> u64 {
        self.master ^ (index as u64).wrapping_add(1).wrapping_mul(MIXING_CONSTANT)
    }

    /// Engine RNG for task number `index`.
    pub fn child(&self, index: usize) -> EngineRng {
        EngineRng::new(self.task_seed(index))
    }
}
