//! The Sweep Analyzer: temperature sweeps and phase-transition summaries.

use std::path::Path;

use chrono::Utc;
use ising_core::{ParameterSet, SweepConfig, SweepRng, T_CRITICAL};
use ising_output::{
    ResultRecord, SUMMARY_FILE, SweepMetadata, SweepSummary, load_batches, sort_by_temperature,
    write_summary_csv,
};
use tracing::info;

use crate::grid::temperature_grid;
use crate::{BatchScheduler, SweepError, SweepResult};

/// Output of a sweep: the summary arrays plus every record, both in
/// ascending temperature order.
#[derive(Clone, Debug)]
pub struct PhaseTransition {
    pub summary: SweepSummary,
    pub records: Vec<ResultRecord>,
}

// ── Finite differences ────────────────────────────────────────────────────────

/// dy/dx sampled at every `x`.
///
/// Interior points use the second-order central difference for non-uniform
/// spacing; the two ends use one-sided first-order differences.  Fewer than
/// two points gives an empty vector.  `x` must be strictly increasing and
/// as long as `y`.
pub fn finite_difference(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len().min(y.len());
    if n < 2 {
        return Vec::new();
    }
    let mut d = Vec::with_capacity(n);
    d.push((y[1] - y[0]) / (x[1] - x[0]));
    for i in 1..n - 1 {
        let hs = x[i] - x[i - 1];
        let hd = x[i + 1] - x[i];
        d.push(
            (hs * hs * y[i + 1] + (hd * hd - hs * hs) * y[i] - hd * hd * y[i - 1])
                / (hs * hd * (hd + hs)),
        );
    }
    d.push((y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]));
    d
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Sort `records` by temperature and extract the per-temperature arrays.
///
/// Fails with [`SweepError::IncompleteResults`] naming every temperature
/// whose record has no observables.
pub fn summarize(
    records:  &mut [ResultRecord],
    metadata: Option<SweepMetadata>,
) -> SweepResult<SweepSummary> {
    sort_by_temperature(records);

    let missing: Vec<f64> = records
        .iter()
        .filter(|r| r.observables.is_none())
        .map(ResultRecord::temperature)
        .collect();
    if !missing.is_empty() {
        return Err(SweepError::IncompleteResults { temperatures: missing });
    }

    let observables: Vec<_> = records.iter().filter_map(|r| r.observables).collect();
    let column = |f: fn(&ising_sim::Observables) -> f64| observables.iter().map(f).collect::<Vec<_>>();

    let temperatures: Vec<f64> = records.iter().map(ResultRecord::temperature).collect();
    let energies = column(|o| o.mean_energy);
    let magnetizations = column(|o| o.mean_magnetization);

    Ok(SweepSummary {
        energy_slopes:        finite_difference(&temperatures, &energies),
        magnetization_slopes: finite_difference(&temperatures, &magnetizations),
        temperatures,
        magnetizations,
        magnetization_stds:   column(|o| o.magnetization_std),
        energies,
        energy_stds:          column(|o| o.energy_std),
        specific_heats:       column(|o| o.specific_heat),
        susceptibilities:     column(|o| o.susceptibility),
        metadata,
    })
}

// ── Sweeps ────────────────────────────────────────────────────────────────────

/// One parameter set per temperature, copied from `template`.
///
/// Prefixes default to `ising_T{T:.3}`.  When the template is seeded its
/// seed acts as a master seed and each task gets an independent derived one.
pub fn sweep_parameters(
    temperatures: &[f64],
    template:     &ParameterSet,
) -> SweepResult<Vec<ParameterSet>> {
    let seeds = template.seed().map(SweepRng::new);
    temperatures
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let builder = template
                .at_temperature(t)
                .seed_opt(seeds.map(|s| s.task_seed(i)));
            Ok(builder.build()?)
        })
        .collect()
}

/// Run one task per temperature through `scheduler`.  Records come back in
/// the order of `temperatures`.
pub fn temperature_sweep(
    temperatures: &[f64],
    template:     &ParameterSet,
    scheduler:    &BatchScheduler,
) -> SweepResult<Vec<ResultRecord>> {
    let params = sweep_parameters(temperatures, template)?;
    scheduler.run(&params)
}

/// Full phase-transition run described by `config`.
///
/// With a `batch_dir`, batch snapshots plus the JSON and CSV summaries are
/// written there.  Fails with [`SweepError::IncompleteResults`] if any task
/// failed.
pub fn analyze_phase_transition(config: &SweepConfig) -> SweepResult<PhaseTransition> {
    config.validate()?;
    let grid = temperature_grid(config.t_min, config.t_max, config.num_points)?;

    let mut scheduler = BatchScheduler::new()
        .batch_size_opt(config.batch_size)
        .batch_dir_opt(config.batch_dir.clone());
    if let Some(workers) = config.num_threads {
        scheduler = scheduler.workers(workers);
    }

    let mut template = ParameterSet::builder(T_CRITICAL)
        .size(config.size)
        .steps(config.steps)
        .burn_in(config.burn_in)
        .seed(config.seed);
    if let Some(dir) = &config.task_dir {
        template = template.persist_to(dir);
    }
    let template = template.build()?;

    info!(
        points = grid.len(),
        t_min = config.t_min,
        t_max = config.t_max,
        size = config.size,
        "phase-transition sweep started"
    );
    let mut records = temperature_sweep(&grid, &template, &scheduler)?;

    let metadata = SweepMetadata {
        t_critical: T_CRITICAL,
        num_points: grid.len(),
        batch_size: scheduler.resolved_batch_size(grid.len()),
        size:       config.size,
        steps:      config.steps,
        burn_in:    config.burn_in,
        timestamp:  Utc::now(),
    };
    let summary = summarize(&mut records, Some(metadata))?;

    if let Some(dir) = &config.batch_dir {
        summary.write_json(dir)?;
        write_summary_csv(dir, &summary)?;
    }
    Ok(PhaseTransition { summary, records })
}

/// Rebuild a sweep from the batch snapshots in `dir`.
///
/// Metadata is taken from `phase_transition_analysis.json` when present.
/// Fails with `NotFound` if `dir` is missing or has no batch files.
pub fn load_sweep(dir: impl AsRef<Path>) -> SweepResult<PhaseTransition> {
    let dir = dir.as_ref();
    let mut records = load_batches(dir)?;

    let summary_file = dir.join(SUMMARY_FILE);
    let metadata = if summary_file.is_file() {
        SweepSummary::read_json(&summary_file)?.metadata
    } else {
        None
    };

    let summary = summarize(&mut records, metadata)?;
    Ok(PhaseTransition { summary, records })
}
