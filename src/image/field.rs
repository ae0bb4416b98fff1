//! Owned and borrowed N-d voxel fields.
//!
//! `Field<V, D>` is the owned container; `HessianField` and `ScalarField` are
//! the two instantiations the filter works with. `FieldRef` wraps an existing
//! buffer without copying.
use nalgebra::SMatrix;

use super::traits::FieldView;
use super::{Domain, Sample};
use crate::error::ObjectnessError;

/// Owned voxel buffer in first-axis-fastest order.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<V, const D: usize> {
    domain: Domain<D>,
    data: Vec<V>,
}

/// Per-voxel symmetric `D x D` second-derivative tensors.
pub type HessianField<T, const D: usize> = Field<SMatrix<T, D, D>, D>;

/// Per-voxel scalar samples.
pub type ScalarField<T, const D: usize> = Field<T, D>;

impl<V: Clone, const D: usize> Field<V, D> {
    /// Field of `domain.len()` copies of `value`.
    pub fn filled(domain: Domain<D>, value: V) -> Self {
        Self {
            data: vec![value; domain.len()],
            domain,
        }
    }
}

impl<V, const D: usize> Field<V, D> {
    /// Wrap an existing buffer; its length must match the domain.
    pub fn from_vec(domain: Domain<D>, data: Vec<V>) -> Result<Self, ObjectnessError> {
        if data.len() != domain.len() {
            return Err(ObjectnessError::DataLength {
                expected: domain.len(),
                found: data.len(),
            });
        }
        Ok(Self { domain, data })
    }

    /// Build a field by evaluating `f` at every N-d index.
    pub fn from_fn(domain: Domain<D>, mut f: impl FnMut([usize; D]) -> V) -> Self {
        let data = (0..domain.len()).map(|o| f(domain.index_of(o))).collect();
        Self { domain, data }
    }

    #[inline]
    pub fn domain(&self) -> &Domain<D> {
        &self.domain
    }

    #[inline]
    pub fn data(&self) -> &[V] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [V] {
        &mut self.data
    }
}

impl<T: Sample, const D: usize> ScalarField<T, D> {
    /// Largest finite sample, or `None` when the field has no finite value.
    pub fn max_finite(&self) -> Option<f64> {
        self.data
            .iter()
            .map(|v| v.to_f64())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

impl<V, const D: usize> FieldView<D> for Field<V, D> {
    type Voxel = V;

    #[inline]
    fn domain(&self) -> &Domain<D> {
        &self.domain
    }
    #[inline]
    fn voxels(&self) -> &[V] {
        &self.data
    }
}

/// Borrowed read-only field over a caller-owned buffer.
#[derive(Clone, Copy, Debug)]
pub struct FieldRef<'a, V, const D: usize> {
    domain: Domain<D>,
    data: &'a [V],
}

impl<'a, V, const D: usize> FieldRef<'a, V, D> {
    pub fn new(domain: Domain<D>, data: &'a [V]) -> Result<Self, ObjectnessError> {
        if data.len() != domain.len() {
            return Err(ObjectnessError::DataLength {
                expected: domain.len(),
                found: data.len(),
            });
        }
        Ok(Self { domain, data })
    }
}

impl<'a, V, const D: usize> FieldView<D> for FieldRef<'a, V, D> {
    type Voxel = V;

    #[inline]
    fn domain(&self) -> &Domain<D> {
        &self.domain
    }
    #[inline]
    fn voxels(&self) -> &[V] {
        self.data
    }
}
