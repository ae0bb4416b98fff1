//! Hessian objectness measure for structures of arbitrary intrinsic dimension.
//!
//! Given eigenvalues sorted by magnitude (`|λ0| <= .. <= |λ(D-1)|`) and an
//! object dimension `m`, the response is the product of:
//!
//! - a sign gate on `λm..λ(D-1)` (bright objects need non-positive curvature
//!   across the structure, dark objects non-negative);
//! - confinement `1 - exp(-Ra² / 2α²)` with `Ra = |λm| / geomean(|λ(m+1)..|)`;
//! - anisotropy rejection `exp(-Rb² / 2β²)` with `Rb = |λ(m-1)| / geomean(|λm..|)`;
//! - a noise floor `1 - exp(-‖λ‖² / 2γ²)`;
//! - optionally the largest magnitude `|λ(D-1)|`.
//!
//! With `m = 1` in 3D this is the Frangi vesselness; `m = 0` gives blobness
//! and `m = D-1` plateness. Failed gates and zero denominators give exactly
//! zero and are reported by [`ObjectnessMeasure::try_evaluate`] as `None`.

mod params;
mod terms;

#[cfg(test)]
mod tests;

pub use params::ObjectnessParams;

use crate::eigen::SortedEigenValues;
use crate::error::ObjectnessError;

/// Objectness parameters validated for a `D`-dimensional image.
///
/// Construction is the only fallible step; evaluation is total and
/// allocation-free so it can run per voxel on any worker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectnessMeasure<const D: usize> {
    params: ObjectnessParams,
}

impl<const D: usize> ObjectnessMeasure<D> {
    pub fn new(params: ObjectnessParams) -> Result<Self, ObjectnessError> {
        if params.object_dimension >= D {
            return Err(ObjectnessError::InvalidObjectDimension {
                object_dimension: params.object_dimension,
                image_dimension: D,
            });
        }
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &ObjectnessParams {
        &self.params
    }

    /// Response for one voxel, `None` when a gate or a degenerate
    /// denominator forces it to zero.
    #[inline]
    pub fn try_evaluate(&self, sorted: &SortedEigenValues<D>) -> Option<f64> {
        let p = &self.params;
        let m = p.object_dimension;

        terms::sign_gate(sorted, m, p.bright_object)?;
        let abs = sorted.magnitudes();

        let mut response = terms::confinement(&abs, m, p.alpha)?;
        response *= terms::anisotropy(&abs, m, p.beta)?;
        response *= terms::noise_floor(&abs, p.gamma);
        response *= terms::scale_compensation(sorted, p.scale_by_largest_eigenvalue);
        Some(response)
    }

    /// Response for one voxel, zero for rejected voxels.
    #[inline]
    pub fn evaluate(&self, sorted: &SortedEigenValues<D>) -> f64 {
        self.try_evaluate(sorted).unwrap_or(0.0)
    }

    /// Sort raw eigenvalues, then evaluate.
    pub fn evaluate_eigenvalues(&self, eigenvalues: [f64; D]) -> f64 {
        self.evaluate(&SortedEigenValues::from_unsorted(eigenvalues))
    }
}
