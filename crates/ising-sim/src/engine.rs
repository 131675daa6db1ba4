//! The `Engine` struct and its Metropolis sweep loop.

use ising_core::{EngineRng, Lattice, NeighborTable};

use crate::{NoopObserver, StepObserver};

// ── Trajectory ────────────────────────────────────────────────────────────────

/// Recorded time series of one run: one entry per recorded sweep, indexed
/// by step number.  Both vectors always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    pub energies:       Vec<f64>,
    pub magnetizations: Vec<f64>,
}

impl Trajectory {
    fn with_capacity(steps: usize) -> Self {
        Self {
            energies:       Vec::with_capacity(steps),
            magnetizations: Vec::with_capacity(steps),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Single-spin-flip Metropolis simulation of one lattice at one temperature.
///
/// `energy` and `magnetization` are updated incrementally on every accepted
/// flip and always agree with a from-scratch recomputation over the current
/// lattice.  Energies are sums of small integers, so the agreement is exact.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
#[derive(Debug)]
pub struct Engine {
    pub(crate) lattice:       Lattice,
    pub(crate) neighbors:     NeighborTable,
    pub(crate) temperature:   f64,
    pub(crate) energy:        f64,
    pub(crate) magnetization: i64,
    pub(crate) rng:           EngineRng,

    /// `exp(-4/T)` and `exp(-8/T)`, the only Boltzmann factors a positive
    /// `dE` can produce on a square lattice.
    pub(crate) boltzmann: [f64; 2],
}

impl Engine {
    pub(crate) fn assemble(lattice: Lattice, temperature: f64, rng: EngineRng) -> Self {
        let neighbors = NeighborTable::new(lattice.size());
        let magnetization = lattice.magnetization();
        let mut engine = Self {
            lattice,
            neighbors,
            temperature,
            energy: 0.0,
            magnetization,
            rng,
            boltzmann: [(-4.0 / temperature).exp(), (-8.0 / temperature).exp()],
        };
        engine.energy = engine.total_energy();
        engine
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Incrementally tracked total energy.
    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Incrementally tracked sum of spins.
    #[inline]
    pub fn magnetization(&self) -> i64 {
        self.magnetization
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn neighbors(&self) -> &NeighborTable {
        &self.neighbors
    }

    /// Consume the engine, keeping only the final lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    // ── Energy ────────────────────────────────────────────────────────────

    /// From-scratch energy: `-Σ s(i,j) · Σ_nn s / 2`.  O(N²).
    pub fn total_energy(&self) -> f64 {
        let sum: i64 = (0..self.lattice.len())
            .map(|k| -(self.lattice.get_index(k) as i64) * self.neighbor_sum(k) as i64)
            .sum();
        sum as f64 / 2.0
    }

    /// Energy change that flipping `(i, j)` would cause: `2 · s · Σ_nn s`.
    pub fn delta_energy_if_flipped(&self, i: usize, j: usize) -> f64 {
        self.delta_at(self.lattice.index(i, j)) as f64
    }

    /// Flip `(i, j)` unconditionally, keeping the bookkeeping in sync.
    /// Returns the energy change.
    pub fn flip(&mut self, i: usize, j: usize) -> f64 {
        let k = self.lattice.index(i, j);
        let de = self.delta_at(k);
        self.apply_flip(k, de);
        de as f64
    }

    #[inline(always)]
    fn neighbor_sum(&self, k: usize) -> i32 {
        self.neighbors
            .of_index(k)
            .iter()
            .map(|&n| self.lattice.get_index(n) as i32)
            .sum()
    }

    #[inline(always)]
    fn delta_at(&self, k: usize) -> i32 {
        2 * self.lattice.get_index(k) as i32 * self.neighbor_sum(k)
    }

    #[inline(always)]
    fn apply_flip(&mut self, k: usize, de: i32) {
        let new_spin = self.lattice.flip_index(k);
        self.energy += de as f64;
        self.magnetization += 2 * new_spin as i64;
    }

    #[inline(always)]
    fn acceptance(&self, de: i32) -> f64 {
        match de {
            4 => self.boltzmann[0],
            8 => self.boltzmann[1],
            _ => (-(de as f64) / self.temperature).exp(),
        }
    }

    // ── Dynamics ──────────────────────────────────────────────────────────

    /// One Metropolis sweep: N² flip attempts at uniformly random cells,
    /// drawn with replacement.
    pub fn step(&mut self) {
        let cells = self.lattice.len();
        for _ in 0..cells {
            let k = self.rng.index(cells);
            let de = self.delta_at(k);
            if de <= 0 || self.rng.unit() < self.acceptance(de) {
                self.apply_flip(k, de);
            }
        }
    }

    /// Run `burn_in` unrecorded sweeps, then `steps` recorded ones.  The
    /// returned series always have length `steps`.
    pub fn simulate(&mut self, steps: usize, burn_in: usize) -> Trajectory {
        self.simulate_observed(steps, burn_in, &mut NoopObserver)
    }

    /// [`simulate`](Self::simulate) with observer callbacks.
    pub fn simulate_observed<O: StepObserver>(
        &mut self,
        steps:    usize,
        burn_in:  usize,
        observer: &mut O,
    ) -> Trajectory {
        for _ in 0..burn_in {
            self.step();
        }
        observer.on_burn_in_end(self.energy, self.magnetization);

        let mut trajectory = Trajectory::with_capacity(steps);
        for t in 0..steps {
            self.step();
            trajectory.energies.push(self.energy);
            trajectory.magnetizations.push(self.magnetization as f64);
            observer.on_step_end(t, self.energy, self.magnetization);
        }
        observer.on_run_end(&self.lattice);
        trajectory
    }
}
