//! Run diagnostics returned alongside the objectness response.
//!
//! Rejected voxels are only ever counted here; nothing is logged per voxel.

use serde::Serialize;
use std::time::Instant;

/// Summary of one filter invocation.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectnessReport {
    /// Image size per axis.
    pub domain: Vec<usize>,
    pub voxels: usize,
    /// Number of disjoint regions the domain was split into.
    pub regions: usize,
    /// Whether regions ran on the worker pool.
    pub parallel: bool,
    /// Voxels forced to zero by the sign gate or a degenerate denominator.
    pub rejected_voxels: usize,
    /// Voxels whose response came out NaN or infinite.
    pub non_finite_responses: usize,
    pub timings: TimingBreakdown,
}

impl ObjectnessReport {
    /// Fraction of voxels forced to zero.
    pub fn rejected_ratio(&self) -> f64 {
        if self.voxels == 0 {
            0.0
        } else {
            self.rejected_voxels as f64 / self.voxels as f64
        }
    }
}

/// Wall-clock time spent in one stage of a filter run.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Stage laps plus the end-to-end time of a filter run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Close the stage that began at `start` and return the start of the next.
    pub fn lap(&mut self, label: &'static str, start: Instant) -> Instant {
        let now = Instant::now();
        self.stages.push(StageTiming {
            label,
            elapsed_ms: millis_between(start, now),
        });
        now
    }

    /// Set `total_ms` from the run's first instant.
    pub fn finish(&mut self, run_start: Instant) {
        self.total_ms = millis_between(run_start, Instant::now());
    }
}

fn millis_between(start: Instant, end: Instant) -> f64 {
    end.saturating_duration_since(start).as_secs_f64() * 1e3
}
