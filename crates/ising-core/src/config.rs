//! Sweep configuration.
//!
//! # Design
//!
//! One `SweepConfig` describes a whole phase-transition run: the temperature
//! window, the per-task simulation template, and the scheduling knobs.  It is
//! plain data so applications can load it from a JSON file (with the `serde`
//! feature) and override fields in code.
//!
//! The temperature grid is denser around the exact critical temperature of
//! the square-lattice model,
//!
//!   Tc = 2 / ln(1 + √2) ≈ 2.269185
//!
//! in units of J/k_B.

use std::path::PathBuf;

use crate::{IsingError, IsingResult};

/// Onsager's critical temperature for the 2D square-lattice Ising model
/// with nearest-neighbor coupling J = 1.
pub const T_CRITICAL: f64 = 2.269_185_314_213_022;

// ── SweepConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration of a temperature sweep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SweepConfig {
    /// Lowest temperature of the grid.
    pub t_min: f64,

    /// Highest temperature of the grid (inclusive).
    pub t_max: f64,

    /// Target number of grid points.  The grid holds `n/2 + n/4 + n/4`
    /// points, so counts not divisible by 4 come out slightly short.
    pub num_points: usize,

    /// Lattice edge length N.
    pub size: usize,

    /// Recorded Metropolis sweeps per task.
    pub steps: usize,

    /// Unrecorded sweeps before sampling starts.
    pub burn_in: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Tasks per batch.  `None` picks `max(1, ceil(tasks / (2 * workers)))`.
    pub batch_size: Option<usize>,

    /// Directory for batch snapshots and the sweep summary.  `None` keeps
    /// everything in memory.
    pub batch_dir: Option<PathBuf>,

    /// Directory for per-task artifacts (lattice, series, parameters).
    pub task_dir: Option<PathBuf>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            t_min:       1.0,
            t_max:       3.5,
            num_points:  20,
            size:        50,
            steps:       1_000,
            burn_in:     100,
            seed:        42,
            num_threads: None,
            batch_size:  None,
            batch_dir:   None,
            task_dir:    None,
        }
    }
}

impl SweepConfig {
    /// Check the fields that can be checked without running anything.
    pub fn validate(&self) -> IsingResult<()> {
        if !(self.t_min.is_finite() && self.t_min > 0.0) {
            return Err(IsingError::invalid(format!(
                "t_min must be a finite value > 0, got {}",
                self.t_min
            )));
        }
        if !(self.t_max.is_finite() && self.t_max > self.t_min) {
            return Err(IsingError::invalid(format!(
                "t_max ({}) must be finite and greater than t_min ({})",
                self.t_max, self.t_min
            )));
        }
        if self.num_points < 4 {
            return Err(IsingError::invalid(format!(
                "num_points must be at least 4, got {}",
                self.num_points
            )));
        }
        if self.size == 0 {
            return Err(IsingError::invalid("lattice size must be at least 1"));
        }
        if self.num_threads == Some(0) {
            return Err(IsingError::invalid("num_threads must be at least 1"));
        }
        if self.batch_size == Some(0) {
            return Err(IsingError::invalid("batch_size must be at least 1"));
        }
        Ok(())
    }
}
