#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod filter;
pub mod image;
pub mod objectness;

// Supporting modules: eigen-analysis seam, run diagnostics, analytic phantoms
// and the JSON configuration used by the command-line tools.
pub mod config;
pub mod diagnostics;
pub mod eigen;
pub mod phantom;

// --- High-level re-exports -------------------------------------------------

// Main entry points: validated measure + region-parallel filter.
pub use crate::error::ObjectnessError;
pub use crate::filter::{compute_objectness, ObjectnessFilter, ParallelOptions};
pub use crate::objectness::{ObjectnessMeasure, ObjectnessParams};

// Run diagnostics returned by the filter.
pub use crate::diagnostics::ObjectnessReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hessian_objectness::prelude::*;
///
/// # fn main() -> Result<(), ObjectnessError> {
/// let domain = Domain::new([64, 64, 32]);
/// let hessians: HessianField<f32, 3> = Phantom::new(domain)
///     .with_structure(GaussianStructure::tube(2, [31.5, 31.5, 0.0], 2.0, 100.0))
///     .hessian_field();
///
/// let filter = ObjectnessFilter::<3>::new(ObjectnessParams::new(1))?;
/// let vesselness: ScalarField<f32, 3> = filter.process(&hessians);
/// println!("peak={:?}", vesselness.max_finite());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::filter::{AtomicProgress, ProgressSink};
    pub use crate::image::{Domain, FieldView, HessianField, ScalarField};
    pub use crate::phantom::{GaussianStructure, Phantom};
    pub use crate::{ObjectnessError, ObjectnessFilter, ObjectnessParams, ParallelOptions};
}
