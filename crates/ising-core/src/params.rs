//! The Parameter Set: one immutable, validated simulation task description.
//!
//! Build with [`ParameterSet::builder`]:
//!
//! ```rust
//! use ising_core::ParameterSet;
//!
//! let params = ParameterSet::builder(2.269)
//!     .size(32)
//!     .steps(500)
//!     .burn_in(50)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.size(), 32);
//! assert_eq!(params.prefix(), "ising_T2.269");
//! ```
//!
//! | Field       | Default           |
//! |-------------|-------------------|
//! | `size`      | 100               |
//! | `steps`     | 1000              |
//! | `burn_in`   | 100               |
//! | `initial`   | random lattice    |
//! | `persist`   | none              |
//! | `seed`      | OS entropy        |

use std::path::{Path, PathBuf};

use crate::{IsingError, IsingResult, Lattice};

pub const DEFAULT_SIZE:    usize = 100;
pub const DEFAULT_STEPS:   usize = 1_000;
pub const DEFAULT_BURN_IN: usize = 100;
pub const DEFAULT_SAVE_DIR: &str = "results";

/// Where and under which filename prefix a task writes its artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persist {
    pub directory: PathBuf,
    pub prefix:    String,
}

/// One simulation task.  Identity is purely value-based.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "record::ParameterRecord", try_from = "record::ParameterRecord")
)]
pub struct ParameterSet {
    size:        usize,
    temperature: f64,
    steps:       usize,
    burn_in:     usize,
    initial:     Option<Lattice>,
    persist:     Option<Persist>,
    prefix:      String,
    seed:        Option<u64>,
}

impl ParameterSet {
    /// Start a builder for a task at `temperature`.
    pub fn builder(temperature: f64) -> ParameterSetBuilder {
        ParameterSetBuilder::new(temperature)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn burn_in(&self) -> usize {
        self.burn_in
    }

    /// Explicit initial lattice, if one was supplied.
    pub fn initial(&self) -> Option<&Lattice> {
        self.initial.as_ref()
    }

    /// Persistence directive, if artifacts should be written.
    pub fn persist(&self) -> Option<&Persist> {
        self.persist.as_ref()
    }

    /// Filename prefix for artifacts (meaningful even when not persisting,
    /// for labelling).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A builder pre-filled from this set but targeting `temperature`.
    /// Size, counts, initial lattice, persistence directory and seed carry
    /// over; the prefix falls back to the default for the new temperature.
    pub fn at_temperature(&self, temperature: f64) -> ParameterSetBuilder {
        ParameterSetBuilder {
            size: self.size,
            temperature,
            steps: self.steps,
            burn_in: self.burn_in,
            initial: self.initial.clone(),
            save_dir: self.persist.as_ref().map(|p| p.directory.clone()),
            prefix: None,
            seed: self.seed,
        }
    }
}

/// Default artifact prefix for a temperature, e.g. `ising_T2.269`.
pub fn default_prefix(temperature: f64) -> String {
    format!("ising_T{temperature:.3}")
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`ParameterSet`].  All checks run in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ParameterSetBuilder {
    size:        usize,
    temperature: f64,
    steps:       usize,
    burn_in:     usize,
    initial:     Option<Lattice>,
    save_dir:    Option<PathBuf>,
    prefix:      Option<String>,
    seed:        Option<u64>,
}

impl ParameterSetBuilder {
    pub fn new(temperature: f64) -> Self {
        Self {
            size: DEFAULT_SIZE,
            temperature,
            steps: DEFAULT_STEPS,
            burn_in: DEFAULT_BURN_IN,
            initial: None,
            save_dir: None,
            prefix: None,
            seed: None,
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    /// Start from `lattice` instead of a random configuration.  Its size
    /// must match [`size`](Self::size) or `build` fails with `ShapeMismatch`.
    pub fn initial(mut self, lattice: Lattice) -> Self {
        self.initial = Some(lattice);
        self
    }

    pub fn initial_opt(mut self, lattice: Option<Lattice>) -> Self {
        self.initial = lattice;
        self
    }

    /// Write the task's artifacts into `dir` after it finishes.
    pub fn persist_to(mut self, dir: impl AsRef<Path>) -> Self {
        self.save_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Override the artifact filename prefix (default `ising_T{T:.3}`).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validate and freeze.
    pub fn build(self) -> IsingResult<ParameterSet> {
        if self.size == 0 {
            return Err(IsingError::invalid("lattice size must be at least 1"));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(IsingError::invalid(format!(
                "temperature must be a finite value > 0, got {}",
                self.temperature
            )));
        }
        if let Some(lattice) = &self.initial {
            lattice.expect_size(self.size)?;
        }
        let prefix = self.prefix.unwrap_or_else(|| default_prefix(self.temperature));
        if prefix.is_empty() {
            return Err(IsingError::invalid("artifact prefix must not be empty"));
        }
        let persist = self.save_dir.map(|directory| Persist {
            directory,
            prefix: prefix.clone(),
        });

        Ok(ParameterSet {
            size: self.size,
            temperature: self.temperature,
            steps: self.steps,
            burn_in: self.burn_in,
            initial: self.initial,
            persist,
            prefix,
            seed: self.seed,
        })
    }
}

// ── Serialized form ───────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod record {
    use std::path::PathBuf;

    use serde::{Deserialize, Serialize};

    use super::*;

    fn default_size() -> i64 {
        DEFAULT_SIZE as i64
    }

    fn default_steps() -> i64 {
        DEFAULT_STEPS as i64
    }

    fn default_burn_in() -> i64 {
        DEFAULT_BURN_IN as i64
    }

    /// Human-readable form of a [`ParameterSet`].  The initial lattice is
    /// flattened to nested rows.  Counts are signed here so that negative
    /// values surface as `InvalidArgument` rather than a bare parse error.
    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct ParameterRecord {
        #[serde(default = "default_size")]
        size:          i64,
        temperature:   f64,
        #[serde(default = "default_steps")]
        steps:         i64,
        #[serde(default = "default_burn_in")]
        burn_in:       i64,
        #[serde(default)]
        initial_state: Option<Vec<Vec<i8>>>,
        #[serde(default)]
        save_results:  bool,
        #[serde(default)]
        save_dir:      Option<PathBuf>,
        #[serde(default)]
        save_prefix:   Option<String>,
        #[serde(default)]
        seed:          Option<u64>,
    }

    fn count(name: &str, value: i64) -> IsingResult<usize> {
        usize::try_from(value)
            .map_err(|_| IsingError::invalid(format!("{name} must be >= 0, got {value}")))
    }

    impl TryFrom<ParameterRecord> for ParameterSet {
        type Error = IsingError;

        fn try_from(r: ParameterRecord) -> IsingResult<Self> {
            let size = count("size", r.size)?;
            let initial = match r.initial_state {
                Some(rows) => Some(Lattice::from_rows(size, &rows)?),
                None => None,
            };
            let mut builder = ParameterSet::builder(r.temperature)
                .size(size)
                .steps(count("steps", r.steps)?)
                .burn_in(count("burn_in", r.burn_in)?)
                .initial_opt(initial)
                .seed_opt(r.seed);
            if let Some(prefix) = r.save_prefix {
                builder = builder.prefix(prefix);
            }
            if r.save_results {
                builder = builder.persist_to(
                    r.save_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR)),
                );
            }
            builder.build()
        }
    }

    impl From<ParameterSet> for ParameterRecord {
        fn from(p: ParameterSet) -> Self {
            ParameterRecord {
                size:          p.size as i64,
                temperature:   p.temperature,
                steps:         p.steps as i64,
                burn_in:       p.burn_in as i64,
                initial_state: p.initial.as_ref().map(Lattice::rows),
                save_results:  p.persist.is_some(),
                save_dir:      p.persist.map(|d| d.directory),
                save_prefix:   Some(p.prefix),
                seed:          p.seed,
            }
        }
    }
}
