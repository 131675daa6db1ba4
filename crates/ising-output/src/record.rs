//! The Result Record produced by one task.

use std::path::PathBuf;

use ising_core::{Lattice, ParameterSet};
use ising_sim::{Observables, Trajectory};
use serde::{Deserialize, Serialize};

/// Outcome of running one [`ParameterSet`].
///
/// Successful records carry the final lattice, both time series and the
/// observables; failed ones carry only the parameters, timing, worker and
/// the error message.  The lattice serializes as nested rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub parameters:     ParameterSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lattice:        Option<Lattice>,
    #[serde(default)]
    pub energies:       Vec<f64>,
    #[serde(default)]
    pub magnetizations: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observables:    Option<Observables>,
    /// Wall-clock seconds spent in the task.
    pub execution_time: f64,
    /// Name of the worker thread that ran the task.
    pub worker:         String,
    pub success:        bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:          Option<String>,
    /// Absolute directory of the task's artifacts, if they were written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path:      Option<PathBuf>,
}

impl ResultRecord {
    pub fn success(
        parameters:     ParameterSet,
        lattice:        Lattice,
        run:            Trajectory,
        observables:    Observables,
        execution_time: f64,
        worker:         impl Into<String>,
    ) -> Self {
        Self {
            parameters,
            lattice:        Some(lattice),
            energies:       run.energies,
            magnetizations: run.magnetizations,
            observables:    Some(observables),
            execution_time,
            worker:         worker.into(),
            success:        true,
            error:          None,
            save_path:      None,
        }
    }

    pub fn failure(
        parameters:     ParameterSet,
        error:          impl ToString,
        execution_time: f64,
        worker:         impl Into<String>,
    ) -> Self {
        Self {
            parameters,
            lattice:        None,
            energies:       Vec::new(),
            magnetizations: Vec::new(),
            observables:    None,
            execution_time,
            worker:         worker.into(),
            success:        false,
            error:          Some(error.to_string()),
            save_path:      None,
        }
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.parameters.temperature()
    }
}

/// Sort records by ascending temperature.
pub fn sort_by_temperature(records: &mut [ResultRecord]) {
    records.sort_by(|a, b| a.temperature().total_cmp(&b.temperature()));
}
