//! Fluent builder for constructing an [`Engine`].

use ising_core::{EngineRng, IsingError, Lattice, ParameterSet};
use tracing::debug;

use crate::{Engine, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.initial(l)`   | Random lattice drawn from the engine RNG |
/// | `.seed(s)`      | OS entropy                               |
/// | `.rng(r)`       | Built from `seed`                        |
///
/// # Example
///
/// ```rust
/// use ising_sim::EngineBuilder;
///
/// let mut engine = EngineBuilder::new(16, 2.0).seed(1).build().unwrap();
/// let run = engine.simulate(10, 5);
/// assert_eq!(run.len(), 10);
/// ```
pub struct EngineBuilder {
    size:        usize,
    temperature: f64,
    initial:     Option<Lattice>,
    seed:        Option<u64>,
    rng:         Option<EngineRng>,
}

impl EngineBuilder {
    pub fn new(size: usize, temperature: f64) -> Self {
        Self {
            size,
            temperature,
            initial: None,
            seed:    None,
            rng:     None,
        }
    }

    /// Size, temperature, initial lattice and seed taken from `params`.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            size:        params.size(),
            temperature: params.temperature(),
            initial:     params.initial().cloned(),
            seed:        params.seed(),
            rng:         None,
        }
    }

    /// Start from `lattice`.  Must be `size×size`.
    pub fn initial(mut self, lattice: Lattice) -> Self {
        self.initial = Some(lattice);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Hand over an already-seeded random source; takes precedence over `seed`.
    pub fn rng(mut self, rng: EngineRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, materialize the lattice and neighbor table, and
    /// compute the initial energy and magnetization.
    pub fn build(self) -> SimResult<Engine> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(IsingError::invalid(format!(
                "temperature must be a finite value > 0, got {}",
                self.temperature
            ))
            .into());
        }

        let mut rng = self
            .rng
            .unwrap_or_else(|| EngineRng::from_optional_seed(self.seed));

        let lattice = match self.initial {
            Some(lattice) => {
                lattice.expect_size(self.size)?;
                lattice
            }
            None => Lattice::random(self.size, &mut rng)?,
        };

        let engine = Engine::assemble(lattice, self.temperature, rng);
        debug!(
            size = engine.size(),
            temperature = engine.temperature(),
            energy = engine.energy(),
            magnetization = engine.magnetization(),
            "engine built"
        );
        Ok(engine)
    }
}
