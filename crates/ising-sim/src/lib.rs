//! `ising-sim` — Metropolis engine and observable calculator.
//!
//! # Sweep loop
//!
//! ```text
//! for step in 0..burn_in + steps:
//!   repeat N² times:
//!     ① Pick   — cell k uniformly at random (with replacement)
//!     ② Delta  — dE = 2 · s(k) · Σ neighbor spins
//!     ③ Accept — if dE ≤ 0 or u < exp(-dE / T):
//!                  flip s(k); energy += dE; magnetization += 2 · s(k)
//!   if step ≥ burn_in: record (energy, magnetization)
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Serialize/Deserialize for [`Observables`].              |
//!
//! # Quick-start
//!
//! ```rust
//! use ising_sim::{EngineBuilder, Observables};
//!
//! let mut engine = EngineBuilder::new(8, 1.5).seed(42).build().unwrap();
//! let run = engine.simulate(200, 50);
//! let obs = Observables::from_trajectory(&run, engine.temperature(), 0).unwrap();
//! assert!(obs.mean_magnetization <= 64.0);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observables;
pub mod observer;


pub use builder::EngineBuilder;
pub use engine::{Engine, Trajectory};
pub use error::{SimError, SimResult};
pub use observables::Observables;
pub use observer::{NoopObserver, StepObserver};
