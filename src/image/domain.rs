//! N-dimensional voxel domains and their partition into disjoint regions.
//!
//! Layout is first-axis-fastest: the voxel at index `[i0, i1, ..]` lives at
//! offset `i0 + size0 * (i1 + size1 * (..))`. Regions produced by
//! [`Domain::split`] are slabs along the slowest non-trivial axis, refined
//! along faster axes when the slowest one is short, so each one maps to a
//! single contiguous range of offsets.
use std::ops::Range;

/// Extent of an N-d image, one size per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Domain<const D: usize> {
    size: [usize; D],
}

impl<const D: usize> Domain<D> {
    pub fn new(size: [usize; D]) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> [usize; D] {
        self.size
    }

    /// Number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.size.iter().product()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, index: &[usize; D]) -> bool {
        index.iter().zip(self.size.iter()).all(|(&i, &s)| i < s)
    }

    /// Linear offset of an N-d index.
    #[inline]
    pub fn offset(&self, index: &[usize; D]) -> usize {
        let mut offset = 0;
        for axis in (0..D).rev() {
            offset = offset * self.size[axis] + index[axis];
        }
        offset
    }

    /// Inverse of [`Domain::offset`].
    pub fn index_of(&self, mut offset: usize) -> [usize; D] {
        let mut index = [0; D];
        for (axis, slot) in index.iter_mut().enumerate() {
            let extent = self.size[axis].max(1);
            *slot = offset % extent;
            offset /= extent;
        }
        index
    }

    pub fn full_region(&self) -> Region<D> {
        Region {
            index: [0; D],
            size: self.size,
        }
    }

    /// Partition the domain into at most `requested` slabs of near-equal size.
    ///
    /// The split runs along the slowest axis whose extent exceeds one; sizes
    /// differ by at most one slice. When that axis is shorter than `requested`,
    /// each of its unit slices is split further along the next non-trivial
    /// axis with its share of the request. The union of the returned regions is
    /// the whole domain, no voxel belongs to two regions and the regions come
    /// in offset order. An empty domain yields no regions.
    pub fn split(&self, requested: usize) -> Vec<Region<D>> {
        let mut regions = Vec::new();
        if !self.is_empty() {
            split_region(self.full_region(), D, requested.max(1), &mut regions);
        }
        regions
    }
}

/// Split `region` along its slowest axis below `axis_limit` with extent > 1.
/// Axes at or above `axis_limit` are already single slices.
fn split_region<const D: usize>(
    region: Region<D>,
    axis_limit: usize,
    requested: usize,
    out: &mut Vec<Region<D>>,
) {
    let Some(axis) = (0..axis_limit).rev().find(|&a| region.size[a] > 1) else {
        out.push(region);
        return;
    };
    let extent = region.size[axis];
    if requested <= extent {
        let base = extent / requested;
        let remainder = extent % requested;
        let mut start = region.index[axis];
        for i in 0..requested {
            let len = base + usize::from(i < remainder);
            let mut slab = region;
            slab.index[axis] = start;
            slab.size[axis] = len;
            out.push(slab);
            start += len;
        }
        return;
    }

    let share = requested / extent;
    let remainder = requested % extent;
    for i in 0..extent {
        let mut slice = region;
        slice.index[axis] = region.index[axis] + i;
        slice.size[axis] = 1;
        split_region(slice, axis, share + usize::from(i < remainder), out);
    }
}

/// Axis-aligned box inside a [`Domain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region<const D: usize> {
    pub index: [usize; D],
    pub size: [usize; D],
}

impl<const D: usize> Region<D> {
    #[inline]
    pub fn len(&self) -> usize {
        self.size.iter().product()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the region occupies one contiguous run of offsets in `domain`:
    /// every axis below the first partial one is full and every axis above it
    /// is a single slice.
    pub fn is_contiguous_in(&self, domain: &Domain<D>) -> bool {
        let extent = domain.size();
        let mut partial = false;
        for axis in 0..D {
            if partial && self.size[axis] > 1 {
                return false;
            }
            if self.size[axis] != extent[axis] {
                partial = true;
            }
        }
        true
    }

    /// Offsets covered by a contiguous region, see [`Region::is_contiguous_in`].
    pub fn offset_range(&self, domain: &Domain<D>) -> Range<usize> {
        debug_assert!(self.is_contiguous_in(domain));
        let start = domain.offset(&self.index);
        start..start + self.len()
    }

    /// Iterate every N-d index of the region, first axis fastest.
    pub fn indices(&self) -> RegionIndices<D> {
        RegionIndices {
            region: *self,
            next: (!self.is_empty()).then_some(self.index),
        }
    }
}

pub struct RegionIndices<const D: usize> {
    region: Region<D>,
    next: Option<[usize; D]>,
}

impl<const D: usize> Iterator for RegionIndices<D> {
    type Item = [usize; D];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut following = current;
        let mut advanced = false;
        for axis in 0..D {
            following[axis] += 1;
            if following[axis] < self.region.index[axis] + self.region.size[axis] {
                advanced = true;
                break;
            }
            following[axis] = self.region.index[axis];
        }
        self.next = advanced.then_some(following);
        Some(current)
    }
}
