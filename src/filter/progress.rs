//! Progress notifications from the region workers.
//!
//! Workers count voxels locally and flush to the shared sink in batches, so
//! a sink is touched roughly a thousand times per run regardless of image
//! size. Notifications from different regions interleave freely.
use std::sync::atomic::{AtomicU64, Ordering};

/// Updates per run the batching aims for.
const TARGET_UPDATES: u64 = 1000;

/// Receives "`units` more voxels done" notifications. Must not block.
pub trait ProgressSink: Send + Sync {
    fn completed(&self, units: u64);
}

impl<F> ProgressSink for F
where
    F: Fn(u64) + Send + Sync,
{
    #[inline]
    fn completed(&self, units: u64) {
        self(units)
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn completed(&self, _units: u64) {}
}

/// Lock-free running total of completed voxels.
#[derive(Debug, Default)]
pub struct AtomicProgress {
    done: AtomicU64,
}

impl AtomicProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Voxels reported so far. May lag behind running workers.
    pub fn count(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    /// Completed fraction of `total`, clamped to `[0, 1]`.
    pub fn fraction(&self, total: u64) -> f64 {
        if total == 0 {
            return 1.0;
        }
        (self.count() as f64 / total as f64).min(1.0)
    }
}

impl ProgressSink for AtomicProgress {
    #[inline]
    fn completed(&self, units: u64) {
        self.done.fetch_add(units, Ordering::Relaxed);
    }
}

/// Per-worker accumulator flushing to a shared sink every `stride` voxels.
pub(crate) struct ProgressBatch<'a> {
    sink: &'a dyn ProgressSink,
    stride: u64,
    pending: u64,
}

impl<'a> ProgressBatch<'a> {
    /// Batch size giving about [`TARGET_UPDATES`] flushes for `total` voxels.
    pub(crate) fn stride_for(total: usize) -> u64 {
        (total as u64 / TARGET_UPDATES).max(1)
    }

    pub(crate) fn new(sink: &'a dyn ProgressSink, stride: u64) -> Self {
        Self {
            sink,
            stride: stride.max(1),
            pending: 0,
        }
    }

    #[inline]
    pub(crate) fn tick(&mut self) {
        self.pending += 1;
        if self.pending >= self.stride {
            self.sink.completed(self.pending);
            self.pending = 0;
        }
    }

    pub(crate) fn flush(&mut self) {
        if self.pending > 0 {
            self.sink.completed(self.pending);
            self.pending = 0;
        }
    }
}

impl Drop for ProgressBatch<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}
