//! CSV rendering of a sweep summary, one row per temperature.

use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use crate::{OutputResult, SweepSummary};

pub const SUMMARY_CSV_FILE: &str = "phase_transition_analysis.csv";

pub const SUMMARY_CSV_HEADER: [&str; 9] = [
    "temperature",
    "mean_energy",
    "energy_std",
    "mean_magnetization",
    "magnetization_std",
    "specific_heat",
    "susceptibility",
    "energy_slope",
    "magnetization_slope",
];

/// Write `phase_transition_analysis.csv` into `dir`; returns the path.
///
/// Slope columns are left blank when the summary has no derivative arrays.
pub fn write_summary_csv(dir: &Path, summary: &SweepSummary) -> OutputResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(SUMMARY_CSV_FILE);
    let mut w = Writer::from_path(&path)?;
    w.write_record(SUMMARY_CSV_HEADER)?;

    let slope = |v: &[f64], i: usize| v.get(i).map(f64::to_string).unwrap_or_default();
    for i in 0..summary.len() {
        w.write_record(&[
            summary.temperatures[i].to_string(),
            summary.energies[i].to_string(),
            summary.energy_stds[i].to_string(),
            summary.magnetizations[i].to_string(),
            summary.magnetization_stds[i].to_string(),
            summary.specific_heats[i].to_string(),
            summary.susceptibilities[i].to_string(),
            slope(&summary.energy_slopes, i),
            slope(&summary.magnetization_slopes, i),
        ])?;
    }
    w.flush()?;
    info!(rows = summary.len(), path = %path.display(), "sweep summary CSV written");
    Ok(path)
}
