//! `ising-output` — result records and on-disk artifacts for Ising sweeps.
//!
//! | Module        | Files created                                                   |
//! |---------------|-----------------------------------------------------------------|
//! | [`artifacts`] | `{prefix}_lattice.npy`, `{prefix}_data.npz`, `{prefix}_params.json` |
//! | [`batch`]     | `batch_0001.json`, `batch_0002.json`, …                         |
//! | [`summary`]   | `phase_transition_analysis.json`                                |
//! | [`csv`]       | `phase_transition_analysis.csv`                                 |
//!
//! Batch persistence is driven through the [`BatchSink`] trait so the
//! scheduler never needs to know about any specific format.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ising_output::{BatchSink, JsonBatchWriter, load_batches};
//!
//! let mut sink = JsonBatchWriter::new("./batches")?;
//! sink.write_batch(1, &records)?;
//! let reloaded = load_batches("./batches")?;
//! ```

pub mod artifacts;
pub mod batch;
pub mod csv;
pub mod error;
pub mod record;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use artifacts::{TaskArtifacts, load_task_artifacts, save_task_artifacts};
pub use batch::{JsonBatchWriter, batch_file_name, load_batches};
pub use csv::{SUMMARY_CSV_FILE, write_summary_csv};
pub use error::{OutputError, OutputResult};
pub use record::{ResultRecord, sort_by_temperature};
pub use summary::{SUMMARY_FILE, SweepMetadata, SweepSummary};
pub use writer::{BatchSink, NoopSink};
