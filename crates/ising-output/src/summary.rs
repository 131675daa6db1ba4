//! The persisted sweep summary.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{OutputError, OutputResult};

/// File name of the JSON summary inside a sweep directory.
pub const SUMMARY_FILE: &str = "phase_transition_analysis.json";

/// How a sweep was run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepMetadata {
    pub t_critical: f64,
    pub num_points: usize,
    pub batch_size: usize,
    pub size:       usize,
    pub steps:      usize,
    pub burn_in:    usize,
    /// Serialized as RFC 3339.
    pub timestamp:  DateTime<Utc>,
}

/// Per-temperature observable arrays, all in ascending temperature order
/// and of equal length (the derivative arrays are empty below two points).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub temperatures:         Vec<f64>,
    /// Mean absolute magnetization.
    pub magnetizations:       Vec<f64>,
    pub magnetization_stds:   Vec<f64>,
    pub energies:             Vec<f64>,
    pub energy_stds:          Vec<f64>,
    pub specific_heats:       Vec<f64>,
    pub susceptibilities:     Vec<f64>,
    /// Finite-difference dE/dT.
    pub energy_slopes:        Vec<f64>,
    /// Finite-difference d|M|/dT.
    pub magnetization_slopes: Vec<f64>,
    /// Absent when the summary was rebuilt from batch snapshots alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata:             Option<SweepMetadata>,
}

impl SweepSummary {
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Write `phase_transition_analysis.json` into `dir`; returns the path.
    pub fn write_json(&self, dir: &Path) -> OutputResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(SUMMARY_FILE);
        serde_json::to_writer_pretty(BufWriter::new(File::create(&path)?), self)?;
        info!(points = self.len(), path = %path.display(), "sweep summary written");
        Ok(path)
    }

    pub fn read_json(path: &Path) -> OutputResult<Self> {
        if !path.is_file() {
            return Err(OutputError::NotFound(path.to_path_buf()));
        }
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }
}
