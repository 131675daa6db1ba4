//! The Task Runner: one parameter set in, one result record out.

use std::thread;
use std::time::Instant;

use ising_core::ParameterSet;
use ising_output::{ResultRecord, save_task_artifacts};
use ising_sim::{EngineBuilder, Observables};

use crate::SweepResult;

/// Name of the current thread, `"main"` for unnamed ones.
pub fn worker_name() -> String {
    thread::current().name().unwrap_or("main").to_owned()
}

/// Build an engine for `params`, simulate, reduce, and optionally persist.
///
/// Never fails: any error is captured in a record with `success == false`.
/// Observables use cutoff 0 because burn-in sweeps are never recorded.
pub fn run_task(params: &ParameterSet) -> ResultRecord {
    let started = Instant::now();
    let worker = worker_name();
    match execute(params, started, &worker) {
        Ok(record) => record,
        Err(e) => ResultRecord::failure(params.clone(), e, started.elapsed().as_secs_f64(), worker),
    }
}

fn execute(params: &ParameterSet, started: Instant, worker: &str) -> SweepResult<ResultRecord> {
    let mut engine = EngineBuilder::from_params(params).build()?;
    let run = engine.simulate(params.steps(), params.burn_in());
    let observables = Observables::from_trajectory(&run, params.temperature(), 0)?;
    let elapsed = started.elapsed().as_secs_f64();
    let lattice = engine.into_lattice();

    let save_path = match params.persist() {
        Some(p) => Some(save_task_artifacts(
            &p.directory,
            &p.prefix,
            params,
            &lattice,
            &run.energies,
            &run.magnetizations,
        )?),
        None => None,
    };

    let mut record = ResultRecord::success(params.clone(), lattice, run, observables, elapsed, worker);
    record.save_path = save_path;
    Ok(record)
}
