//! Per-task artifacts.
//!
//! Three files in one directory, sharing a prefix:
//!
//! | File                    | Contents                                            |
//! |-------------------------|-----------------------------------------------------|
//! | `{prefix}_lattice.npy`  | final lattice, `int8`, shape `(N, N)`               |
//! | `{prefix}_data.npz`     | compressed; `energies` and `magnetizations` (`f64`) |
//! | `{prefix}_params.json`  | the parameter set, pretty-printed                   |

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use ising_core::{IsingError, Lattice, ParameterSet};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use ndarray_npy::{NpzReader, NpzWriter, ReadNpyExt, WriteNpyExt};
use tracing::info;

use crate::{OutputError, OutputResult};

const ENERGIES:       &str = "energies";
const MAGNETIZATIONS: &str = "magnetizations";

pub fn lattice_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{prefix}_lattice.npy"))
}

pub fn data_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{prefix}_data.npz"))
}

pub fn params_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{prefix}_params.json"))
}

/// Everything read back by [`load_task_artifacts`].
#[derive(Clone, Debug, PartialEq)]
pub struct TaskArtifacts {
    pub parameters:     ParameterSet,
    pub lattice:        Lattice,
    pub energies:       Vec<f64>,
    pub magnetizations: Vec<f64>,
}

/// Write the three artifact files into `dir` (created if missing) and return
/// its absolute path.
pub fn save_task_artifacts(
    dir:            &Path,
    prefix:         &str,
    parameters:     &ParameterSet,
    lattice:        &Lattice,
    energies:       &[f64],
    magnetizations: &[f64],
) -> OutputResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let n = lattice.size();
    let grid = ArrayView2::from_shape((n, n), lattice.spins())?;
    grid.write_npy(BufWriter::new(File::create(lattice_path(dir, prefix))?))?;

    let mut npz = NpzWriter::new_compressed(File::create(data_path(dir, prefix))?);
    npz.add_array(ENERGIES, &ArrayView1::from(energies))?;
    npz.add_array(MAGNETIZATIONS, &ArrayView1::from(magnetizations))?;
    npz.finish()?;

    let writer = BufWriter::new(File::create(params_path(dir, prefix))?);
    serde_json::to_writer_pretty(writer, parameters)?;

    let path = fs::canonicalize(dir)?;
    info!(path = %path.display(), prefix, "task artifacts written");
    Ok(path)
}

/// Read back what [`save_task_artifacts`] wrote.
pub fn load_task_artifacts(dir: &Path, prefix: &str) -> OutputResult<TaskArtifacts> {
    let lattice_file = lattice_path(dir, prefix);
    if !lattice_file.is_file() {
        return Err(OutputError::NotFound(lattice_file));
    }

    let grid = Array2::<i8>::read_npy(BufReader::new(File::open(&lattice_file)?))?;
    let (rows, cols) = grid.dim();
    if rows != cols {
        return Err(IsingError::ShapeMismatch { expected: rows, rows, cols }.into());
    }
    let lattice = Lattice::from_flat(rows, grid.iter().copied().collect())?;

    let mut npz = NpzReader::new(File::open(data_path(dir, prefix))?)?;
    let energies: Array1<f64> = npz.by_name(&format!("{ENERGIES}.npy"))?;
    let magnetizations: Array1<f64> = npz.by_name(&format!("{MAGNETIZATIONS}.npy"))?;

    let reader = BufReader::new(File::open(params_path(dir, prefix))?);
    let parameters: ParameterSet = serde_json::from_reader(reader)?;

    Ok(TaskArtifacts {
        parameters,
        lattice,
        energies:       energies.to_vec(),
        magnetizations: magnetizations.to_vec(),
    })
}
