//! Step observer trait for progress reporting and data collection.

use ising_core::Lattice;

/// Callbacks invoked by [`Engine::simulate_observed`][crate::Engine::simulate_observed]
/// at key points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: usize }
///
/// impl StepObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: usize, energy: f64, magnetization: i64) {
///         if step % self.interval == 0 {
///             println!("step {step}: E = {energy}, M = {magnetization}");
///         }
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called once after the last burn-in sweep (also when `burn_in == 0`).
    fn on_burn_in_end(&mut self, _energy: f64, _magnetization: i64) {}

    /// Called after each recorded sweep; `step` counts from 0.
    fn on_step_end(&mut self, _step: usize, _energy: f64, _magnetization: i64) {}

    /// Called once after the final recorded sweep.
    fn on_run_end(&mut self, _lattice: &Lattice) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
