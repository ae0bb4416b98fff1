/// Controls whether regions are scored sequentially or on the Rayon pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelOptions {
    enabled: bool,
    min_voxels_for_parallel: usize,
    regions: Option<usize>,
}

/// Regions per worker thread when the count is not fixed explicitly; a few
/// slabs per thread keep workers busy when slab costs differ.
const REGIONS_PER_THREAD: usize = 4;

impl ParallelOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_voxels_for_parallel: usize) -> Self {
        Self {
            enabled,
            min_voxels_for_parallel: min_voxels_for_parallel.max(1),
            regions: None,
        }
    }

    /// Always run a single region on the calling thread.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_voxels_for_parallel: usize::MAX,
            regions: None,
        }
    }

    /// Returns true when parallel scoring should be used for `voxel_count`.
    pub fn should_parallelize(&self, voxel_count: usize) -> bool {
        cfg!(feature = "parallel") && self.enabled && voxel_count >= self.min_voxels_for_parallel
    }

    /// Fix the number of regions instead of deriving it from the pool size.
    pub fn with_regions(mut self, regions: usize) -> Self {
        self.regions = Some(regions.max(1));
        self
    }

    /// Number of regions requested from the domain partition.
    pub fn region_count(&self) -> usize {
        self.regions
            .unwrap_or_else(|| worker_threads() * REGIONS_PER_THREAD)
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_voxels_for_parallel: 4096,
            regions: None,
        }
    }
}

#[cfg(feature = "parallel")]
fn worker_threads() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn worker_threads() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_parallelizes() {
        let opts = ParallelOptions::disabled();
        assert!(!opts.should_parallelize(usize::MAX));
    }

    #[test]
    fn threshold_and_region_override() {
        let opts = ParallelOptions::new(true, 100).with_regions(0);
        assert_eq!(opts.region_count(), 1);
        assert!(!opts.should_parallelize(99));
        assert_eq!(opts.should_parallelize(100), cfg!(feature = "parallel"));
    }
}
