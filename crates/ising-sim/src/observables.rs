//! Thermodynamic observables from an energy/magnetization time series.
//!
//! | Quantity             | Formula                              |
//! |----------------------|--------------------------------------|
//! | `mean_energy`        | ⟨E⟩                                  |
//! | `mean_magnetization` | ⟨\|M\|⟩                              |
//! | `specific_heat`      | (⟨E²⟩ − ⟨E⟩²) / T²                   |
//! | `susceptibility`     | (⟨M²⟩ − ⟨\|M\|⟩²) / T                |
//! | `energy_std`         | population standard deviation of E   |
//! | `magnetization_std`  | population standard deviation of M   |
//!
//! Values are extensive (whole lattice).  Use [`Observables::per_spin`] to
//! normalize.
//!
//! Both fluctuation terms are variances (⟨M²⟩ = ⟨|M|²⟩), so they are
//! evaluated with a two-pass mean of squared deviations, which is exactly
//! zero for a constant series.

use crate::{SimError, SimResult, Trajectory};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observables {
    pub mean_energy:        f64,
    /// Mean of the absolute magnetization.
    pub mean_magnetization: f64,
    pub specific_heat:      f64,
    pub susceptibility:     f64,
    pub energy_std:         f64,
    pub magnetization_std:  f64,
}

impl Observables {
    /// Reduce `energies`/`magnetizations` at `temperature`, discarding the
    /// first `cutoff` samples of each.
    pub fn compute(
        energies:       &[f64],
        magnetizations: &[f64],
        temperature:    f64,
        cutoff:         usize,
    ) -> SimResult<Self> {
        if energies.len() != magnetizations.len() {
            return Err(SimError::LengthMismatch {
                energies:       energies.len(),
                magnetizations: magnetizations.len(),
            });
        }
        let len = energies.len();
        if cutoff >= len {
            return Err(SimError::EmptySeries { len, cutoff });
        }
        let e = &energies[cutoff..];
        let m = &magnetizations[cutoff..];

        let mean_energy = mean(e.iter().copied());
        let mean_abs_m  = mean(m.iter().map(|x| x.abs()));
        let mean_m      = mean(m.iter().copied());

        let var_e     = mean(e.iter().map(|x| (x - mean_energy).powi(2)));
        let var_abs_m = mean(m.iter().map(|x| (x.abs() - mean_abs_m).powi(2)));
        let var_m     = mean(m.iter().map(|x| (x - mean_m).powi(2)));

        Ok(Self {
            mean_energy,
            mean_magnetization: mean_abs_m,
            specific_heat:      var_e / (temperature * temperature),
            susceptibility:     var_abs_m / temperature,
            energy_std:         var_e.sqrt(),
            magnetization_std:  var_m.sqrt(),
        })
    }

    /// Shorthand for [`compute`](Self::compute) over a recorded run.
    pub fn from_trajectory(run: &Trajectory, temperature: f64, cutoff: usize) -> SimResult<Self> {
        Self::compute(&run.energies, &run.magnetizations, temperature, cutoff)
    }

    /// Every quantity divided by the spin count `size²`.
    pub fn per_spin(&self, size: usize) -> Self {
        let n = (size * size) as f64;
        Self {
            mean_energy:        self.mean_energy / n,
            mean_magnetization: self.mean_magnetization / n,
            specific_heat:      self.specific_heat / n,
            susceptibility:     self.susceptibility / n,
            energy_std:         self.energy_std / n,
            magnetization_std:  self.magnetization_std / n,
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len() as f64;
    values.sum::<f64>() / n
}
