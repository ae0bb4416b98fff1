use super::Domain;

/// Read access to a voxel field laid out contiguously over a [`Domain`].
pub trait FieldView<const D: usize> {
    type Voxel;

    fn domain(&self) -> &Domain<D>;

    /// All voxels in first-axis-fastest order; `len() == domain().len()`.
    fn voxels(&self) -> &[Self::Voxel];

    #[inline]
    fn get(&self, index: &[usize; D]) -> &Self::Voxel {
        &self.voxels()[self.domain().offset(index)]
    }
}
