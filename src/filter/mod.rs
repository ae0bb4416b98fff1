//! Region-parallel evaluation of the objectness measure over a Hessian field.
//!
//! The domain is split into slabs ([`Domain::split`]); each slab owns a
//! disjoint slice of the output, so workers write without locks. Per voxel the
//! worker converts the tensor to `f64`, asks the eigen-solver for the spectrum,
//! sorts it by magnitude, scores it and casts the response once into the
//! output sample type. Voxels never read each other, so the result does not
//! depend on how the domain was split.

mod parallel;
mod progress;

pub use parallel::ParallelOptions;
pub use progress::{AtomicProgress, NoProgress, ProgressSink};

use crate::diagnostics::{ObjectnessReport, TimingBreakdown};
use crate::eigen::{NalgebraEigenSolver, SortedEigenValues, SymmetricEigenSolver};
use crate::error::ObjectnessError;
use crate::image::{Domain, FieldView, Region, Sample, ScalarField};
use crate::objectness::{ObjectnessMeasure, ObjectnessParams};
use log::{debug, warn};
use nalgebra::{ArrayStorage, SMatrix};
use progress::ProgressBatch;
use std::time::Instant;

/// Objectness filter bound to an image dimension and an eigen-solver.
#[derive(Clone, Debug)]
pub struct ObjectnessFilter<const D: usize, S = NalgebraEigenSolver> {
    measure: ObjectnessMeasure<D>,
    solver: S,
    parallel: ParallelOptions,
}

impl<const D: usize> ObjectnessFilter<D, NalgebraEigenSolver>
where
    NalgebraEigenSolver: SymmetricEigenSolver<D>,
{
    /// Validate `params` for `D` dimensions and use the nalgebra solver.
    pub fn new(params: ObjectnessParams) -> Result<Self, ObjectnessError> {
        Self::with_solver(params, NalgebraEigenSolver)
    }
}

impl<const D: usize, S: SymmetricEigenSolver<D>> ObjectnessFilter<D, S> {
    pub fn with_solver(params: ObjectnessParams, solver: S) -> Result<Self, ObjectnessError> {
        Ok(Self {
            measure: ObjectnessMeasure::new(params)?,
            solver,
            parallel: ParallelOptions::default(),
        })
    }

    pub fn with_parallel(mut self, parallel: ParallelOptions) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn measure(&self) -> &ObjectnessMeasure<D> {
        &self.measure
    }

    /// Objectness response for every voxel of `input`.
    pub fn process<T, O, I>(&self, input: &I) -> ScalarField<O, D>
    where
        T: Sample,
        O: Sample,
        I: FieldView<D, Voxel = SMatrix<T, D, D>> + Sync,
    {
        self.process_with_progress(input, &NoProgress).0
    }

    /// Like [`process`](Self::process), reporting progress and run diagnostics.
    pub fn process_with_progress<T, O, I>(
        &self,
        input: &I,
        progress: &dyn ProgressSink,
    ) -> (ScalarField<O, D>, ObjectnessReport)
    where
        T: Sample,
        O: Sample,
        I: FieldView<D, Voxel = SMatrix<T, D, D>> + Sync,
    {
        let mut output = ScalarField::filled(*input.domain(), O::default());
        let report = self.run(input, output.data_mut(), progress);
        (output, report)
    }

    /// Write the response into a caller-provided field of the same domain.
    pub fn process_into<T, O, I>(
        &self,
        input: &I,
        output: &mut ScalarField<O, D>,
        progress: &dyn ProgressSink,
    ) -> Result<ObjectnessReport, ObjectnessError>
    where
        T: Sample,
        O: Sample,
        I: FieldView<D, Voxel = SMatrix<T, D, D>> + Sync,
    {
        if output.domain() != input.domain() {
            return Err(ObjectnessError::ShapeMismatch {
                expected: input.domain().size().to_vec(),
                found: output.domain().size().to_vec(),
            });
        }
        Ok(self.run(input, output.data_mut(), progress))
    }

    fn run<T, O, I>(&self, input: &I, output: &mut [O], progress: &dyn ProgressSink) -> ObjectnessReport
    where
        T: Sample,
        O: Sample,
        I: FieldView<D, Voxel = SMatrix<T, D, D>> + Sync,
    {
        let t0 = Instant::now();
        let mut timings = TimingBreakdown::default();
        let domain = *input.domain();
        let voxels = input.voxels();
        debug_assert_eq!(voxels.len(), domain.len());

        let parallel = self.parallel.should_parallelize(domain.len());
        let requested = if parallel { self.parallel.region_count() } else { 1 };
        let regions = domain.split(requested);
        debug!(
            "ObjectnessFilter: {:?} ({} voxels) in {} region(s), parallel={} [{}]",
            domain.size(),
            domain.len(),
            regions.len(),
            parallel,
            self.measure.params()
        );

        let t_stage = Instant::now();
        let slices = split_output(&domain, &regions, output);
        let t_stage = timings.lap("partition", t_stage);

        let stride = ProgressBatch::stride_for(domain.len());
        let job = RegionJob {
            measure: &self.measure,
            solver: &self.solver,
            domain: &domain,
            voxels,
            progress,
            stride,
        };
        let stats = job.run_all(&regions, slices, parallel);
        timings.lap("score", t_stage);
        timings.finish(t0);

        if stats.non_finite > 0 {
            warn!(
                "ObjectnessFilter: {} of {} responses are not finite; check the Hessian input",
                stats.non_finite, stats.voxels
            );
        }
        let report = ObjectnessReport {
            domain: domain.size().to_vec(),
            voxels: stats.voxels,
            regions: regions.len(),
            parallel,
            rejected_voxels: stats.rejected,
            non_finite_responses: stats.non_finite,
            timings,
        };
        debug!(
            "ObjectnessFilter: done in {:.3} ms, {:.1}% of voxels rejected",
            report.timings.total_ms,
            100.0 * report.rejected_ratio()
        );
        report
    }
}

/// Validate `params` for `D` dimensions and compute the response of every
/// voxel with the default solver and parallel settings.
pub fn compute_objectness<T, O, I, const D: usize>(
    input: &I,
    params: ObjectnessParams,
) -> Result<ScalarField<O, D>, ObjectnessError>
where
    T: Sample,
    O: Sample,
    I: FieldView<D, Voxel = SMatrix<T, D, D>> + Sync,
    NalgebraEigenSolver: SymmetricEigenSolver<D>,
{
    Ok(ObjectnessFilter::<D>::new(params)?.process(input))
}

#[derive(Clone, Copy, Debug, Default)]
struct RegionStats {
    voxels: usize,
    rejected: usize,
    non_finite: usize,
}

impl RegionStats {
    fn merge(self, other: Self) -> Self {
        Self {
            voxels: self.voxels + other.voxels,
            rejected: self.rejected + other.rejected,
            non_finite: self.non_finite + other.non_finite,
        }
    }
}

/// Read-only state shared by every region worker.
struct RegionJob<'a, T, S, const D: usize> {
    measure: &'a ObjectnessMeasure<D>,
    solver: &'a S,
    domain: &'a Domain<D>,
    voxels: &'a [SMatrix<T, D, D>],
    progress: &'a dyn ProgressSink,
    stride: u64,
}

impl<'a, T: Sample, S: SymmetricEigenSolver<D>, const D: usize> RegionJob<'a, T, S, D> {
    fn run_all<O: Sample>(
        &self,
        regions: &[Region<D>],
        slices: Vec<&mut [O]>,
        parallel: bool,
    ) -> RegionStats {
        if parallel {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;

                return slices
                    .into_par_iter()
                    .zip(regions.par_iter())
                    .map(|(out, region)| self.score_region(region, out))
                    .reduce(RegionStats::default, RegionStats::merge);
            }
        }

        slices
            .into_iter()
            .zip(regions)
            .map(|(out, region)| self.score_region(region, out))
            .fold(RegionStats::default(), RegionStats::merge)
    }

    fn score_region<O: Sample>(&self, region: &Region<D>, out: &mut [O]) -> RegionStats {
        let input = &self.voxels[region.offset_range(self.domain)];
        let mut batch = ProgressBatch::new(self.progress, self.stride);
        let mut stats = RegionStats {
            voxels: input.len(),
            ..RegionStats::default()
        };

        for (hessian, slot) in input.iter().zip(out.iter_mut()) {
            let tensor = to_f64_tensor(hessian);
            let sorted = SortedEigenValues::from_unsorted(self.solver.eigenvalues(&tensor));
            let response = match self.measure.try_evaluate(&sorted) {
                Some(value) => {
                    if !value.is_finite() {
                        stats.non_finite += 1;
                    }
                    value
                }
                None => {
                    stats.rejected += 1;
                    0.0
                }
            };
            *slot = O::from_f64(response);
            batch.tick();
        }
        batch.flush();
        stats
    }
}

/// Cut `output` into one slice per region. Regions come from
/// [`Domain::split`] and therefore cover adjacent, ordered offset ranges.
fn split_output<'o, O, const D: usize>(
    domain: &Domain<D>,
    regions: &[Region<D>],
    mut output: &'o mut [O],
) -> Vec<&'o mut [O]> {
    let mut slices = Vec::with_capacity(regions.len());
    let mut consumed = 0;
    for region in regions {
        debug_assert_eq!(region.offset_range(domain).start, consumed);
        let (head, tail) = std::mem::take(&mut output).split_at_mut(region.len());
        slices.push(head);
        output = tail;
        consumed += region.len();
    }
    slices
}

#[inline]
fn to_f64_tensor<T: Sample, const D: usize>(tensor: &SMatrix<T, D, D>) -> SMatrix<f64, D, D> {
    let columns = &tensor.data.0;
    SMatrix::from_array_storage(ArrayStorage(std::array::from_fn(|c| {
        std::array::from_fn(|r| columns[c][r].to_f64())
    })))
}
