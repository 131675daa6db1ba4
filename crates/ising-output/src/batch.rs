//! Per-batch JSON snapshots and the load path.
//!
//! Each completed batch becomes `batch_{index:04}.json`: a pretty-printed
//! JSON array of [`ResultRecord`]s with lattices flattened to nested rows.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::record::sort_by_temperature;
use crate::writer::BatchSink;
use crate::{OutputError, OutputResult, ResultRecord};

pub fn batch_file_name(index: usize) -> String {
    format!("batch_{index:04}.json")
}

fn is_batch_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("batch_") && n.ends_with(".json"))
}

// ── JsonBatchWriter ───────────────────────────────────────────────────────────

/// Writes one JSON snapshot per batch into a directory.
pub struct JsonBatchWriter {
    dir:     PathBuf,
    written: Vec<PathBuf>,
}

impl JsonBatchWriter {
    /// Create `dir` if needed.
    pub fn new(dir: impl AsRef<Path>) -> OutputResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: Vec::new() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in batch order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl BatchSink for JsonBatchWriter {
    fn write_batch(&mut self, index: usize, records: &[ResultRecord]) -> OutputResult<()> {
        let path = self.dir.join(batch_file_name(index));
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, records)?;
        info!(batch = index, records = records.len(), path = %path.display(), "batch snapshot written");
        self.written.push(path);
        Ok(())
    }
}

// ── Load path ─────────────────────────────────────────────────────────────────

/// Load every `batch_*.json` in `dir` and return all records sorted by
/// temperature.
///
/// Fails with [`OutputError::NotFound`] if `dir` does not exist or holds no
/// batch files.
pub fn load_batches(dir: impl AsRef<Path>) -> OutputResult<Vec<ResultRecord>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(OutputError::NotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_batch_file(&path) {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(OutputError::NotFound(dir.to_path_buf()));
    }
    files.sort();

    let mut records = Vec::new();
    for path in &files {
        let batch: Vec<ResultRecord> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), records = batch.len(), "batch snapshot loaded");
        records.extend(batch);
    }
    sort_by_temperature(&mut records);
    Ok(records)
}
