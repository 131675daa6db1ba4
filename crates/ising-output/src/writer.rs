//! The `BatchSink` trait implemented by batch persistence backends.

use crate::{OutputResult, ResultRecord};

/// Receives each completed batch, in order, before the next one starts.
///
/// `index` counts batches from 1.
pub trait BatchSink {
    fn write_batch(&mut self, index: usize, records: &[ResultRecord]) -> OutputResult<()>;

    /// Flush anything still buffered.  Idempotent.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// A [`BatchSink`] that discards everything.
pub struct NoopSink;

impl BatchSink for NoopSink {
    fn write_batch(&mut self, _index: usize, _records: &[ResultRecord]) -> OutputResult<()> {
        Ok(())
    }
}
