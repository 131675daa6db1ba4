//! `ising-sweep` — parallel parameter sweeps over the Ising engine.
//!
//! # Data flow
//!
//! ```text
//! SweepConfig ─▶ temperature_grid ─▶ Vec<ParameterSet>
//!                                        │
//!                          BatchScheduler::run (rayon pool, per call)
//!                                        │  run_task per worker
//!                                        ▼
//!                               Vec<ResultRecord> (input order)
//!                                        │  summarize (sort by T)
//!                                        ▼
//!                                  SweepSummary
//! ```
//!
//! # Quick-start
//!
//! ```rust,no_run
//! use ising_core::SweepConfig;
//! use ising_sweep::analyze_phase_transition;
//!
//! let config = SweepConfig { size: 16, steps: 200, ..SweepConfig::default() };
//! let sweep = analyze_phase_transition(&config).unwrap();
//! for (t, c) in sweep.summary.temperatures.iter().zip(&sweep.summary.specific_heats) {
//!     println!("{t:.3} {c:.3}");
//! }
//! ```

pub mod analyzer;
pub mod error;
pub mod grid;
pub mod runner;
pub mod scheduler;


pub use analyzer::{
    PhaseTransition, analyze_phase_transition, finite_difference, load_sweep, summarize,
    sweep_parameters, temperature_sweep,
};
pub use error::{SweepError, SweepResult};
pub use grid::{linspace, temperature_grid};
pub use runner::run_task;
pub use scheduler::{BatchScheduler, default_batch_size, default_workers};
