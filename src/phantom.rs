//! Analytic test volumes: sums of Gaussian blobs, tubes and plates.
//!
//! Each structure has the profile `A * exp(-r² / 2σ²)` where `r` is the
//! distance to the structure's axis-aligned core (a point, line or plane).
//! The Hessian is evaluated in closed form, so filters can be exercised on
//! exact second derivatives without a differentiation stage.
//!
//! Coordinates are voxel indices (unit spacing). Positive amplitudes give
//! bright structures, negative amplitudes dark ones.
use crate::image::{Domain, Field, HessianField, Sample, ScalarField};
use nalgebra::{ArrayStorage, SMatrix};

/// One Gaussian structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianStructure<const D: usize> {
    /// Axes the structure extends along; the others are cross-sectional.
    pub along: [bool; D],
    pub center: [f64; D],
    pub sigma: f64,
    pub amplitude: f64,
}

impl<const D: usize> GaussianStructure<D> {
    pub fn blob(center: [f64; D], sigma: f64, amplitude: f64) -> Self {
        Self {
            along: [false; D],
            center,
            sigma,
            amplitude,
        }
    }

    /// Tube running parallel to `axis` through `center`.
    ///
    /// Panics if `axis >= D`.
    pub fn tube(axis: usize, center: [f64; D], sigma: f64, amplitude: f64) -> Self {
        assert!(axis < D, "tube axis {axis} out of range for {D} dimensions");
        let mut along = [false; D];
        along[axis] = true;
        Self {
            along,
            center,
            sigma,
            amplitude,
        }
    }

    /// Plate (hypersurface) orthogonal to `normal_axis` through `center`.
    ///
    /// Panics if `normal_axis >= D`.
    pub fn plate(normal_axis: usize, center: [f64; D], sigma: f64, amplitude: f64) -> Self {
        assert!(
            normal_axis < D,
            "plate normal axis {normal_axis} out of range for {D} dimensions"
        );
        let mut along = [true; D];
        along[normal_axis] = false;
        Self {
            along,
            center,
            sigma,
            amplitude,
        }
    }

    /// Intrinsic dimension: number of axes the structure extends along.
    pub fn object_dimension(&self) -> usize {
        self.along.iter().filter(|&&a| a).count()
    }

    fn offsets(&self, point: &[f64; D]) -> ([f64; D], f64) {
        let mut d = [0.0; D];
        let mut r2 = 0.0;
        for axis in 0..D {
            if !self.along[axis] {
                d[axis] = point[axis] - self.center[axis];
                r2 += d[axis] * d[axis];
            }
        }
        (d, r2)
    }

    pub fn intensity_at(&self, point: &[f64; D]) -> f64 {
        let (_, r2) = self.offsets(point);
        self.amplitude * (-0.5 * r2 / (self.sigma * self.sigma)).exp()
    }

    /// Second derivatives at `point`; symmetric, zero on rows of `along` axes.
    pub fn hessian_at(&self, point: &[f64; D]) -> [[f64; D]; D] {
        let (d, r2) = self.offsets(point);
        let s2 = self.sigma * self.sigma;
        let g = self.amplitude * (-0.5 * r2 / s2).exp();
        let mut h = [[0.0; D]; D];
        for i in (0..D).filter(|&i| !self.along[i]) {
            for j in (0..D).filter(|&j| !self.along[j]) {
                let delta = if i == j { 1.0 } else { 0.0 };
                h[i][j] = g * (d[i] * d[j] / (s2 * s2) - delta / s2);
            }
        }
        h
    }
}

/// Sum of Gaussian structures sampled on a voxel domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Phantom<const D: usize> {
    pub domain: Domain<D>,
    pub structures: Vec<GaussianStructure<D>>,
}

impl<const D: usize> Phantom<D> {
    pub fn new(domain: Domain<D>) -> Self {
        Self {
            domain,
            structures: Vec::new(),
        }
    }

    pub fn with_structure(mut self, structure: GaussianStructure<D>) -> Self {
        self.structures.push(structure);
        self
    }

    /// Geometric center of the domain in voxel coordinates.
    pub fn center(&self) -> [f64; D] {
        self.domain.size().map(|s| (s as f64 - 1.0).max(0.0) * 0.5)
    }

    pub fn intensity_field<T: Sample>(&self) -> ScalarField<T, D> {
        Field::from_fn(self.domain, |index| {
            let p = to_point(index);
            T::from_f64(self.structures.iter().map(|s| s.intensity_at(&p)).sum())
        })
    }

    pub fn hessian_field<T: Sample>(&self) -> HessianField<T, D> {
        Field::from_fn(self.domain, |index| {
            let p = to_point(index);
            let mut total = [[0.0; D]; D];
            for structure in &self.structures {
                let h = structure.hessian_at(&p);
                for (row_total, row) in total.iter_mut().zip(h.iter()) {
                    for (t, v) in row_total.iter_mut().zip(row.iter()) {
                        *t += v;
                    }
                }
            }
            SMatrix::from_array_storage(ArrayStorage(total.map(|col| col.map(T::from_f64))))
        })
    }
}

#[inline]
fn to_point<const D: usize>(index: [usize; D]) -> [f64; D] {
    index.map(|i| i as f64)
}
