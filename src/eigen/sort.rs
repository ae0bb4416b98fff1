//! Sign-preserving magnitude ordering of eigenvalues.
use std::ops::Index;

/// Eigenvalues ordered so that `|v[0]| <= |v[1]| <= ... <= |v[D-1]|`.
///
/// Signs are kept. Equal magnitudes keep their input order (stable sort), so
/// `(-2, 2)` and `(2, -2)` stay distinct. NaN entries sort after every finite
/// magnitude; the resulting objectness is unspecified but never panics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortedEigenValues<const D: usize>([f64; D]);

impl<const D: usize> SortedEigenValues<D> {
    pub fn from_unsorted(mut values: [f64; D]) -> Self {
        values.sort_by(|a, b| a.abs().total_cmp(&b.abs()));
        Self(values)
    }

    #[inline]
    pub fn values(&self) -> &[f64; D] {
        &self.0
    }

    /// Absolute values, in the same (ascending) order.
    #[inline]
    pub fn magnitudes(&self) -> [f64; D] {
        self.0.map(f64::abs)
    }

    /// `|v[D-1]|`, zero for `D == 0`.
    #[inline]
    pub fn largest_magnitude(&self) -> f64 {
        self.0.last().map_or(0.0, |v| v.abs())
    }
}

impl<const D: usize> Index<usize> for SortedEigenValues<D> {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl<const D: usize> From<[f64; D]> for SortedEigenValues<D> {
    fn from(values: [f64; D]) -> Self {
        Self::from_unsorted(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn orders_by_magnitude_and_keeps_sign() {
        let sorted = SortedEigenValues::from_unsorted([-5.0, 0.5, 3.0, -1.0]);
        assert_eq!(sorted.values(), &[0.5, -1.0, 3.0, -5.0]);
        assert_eq!(sorted.magnitudes(), [0.5, 1.0, 3.0, 5.0]);
        assert_eq!(sorted.largest_magnitude(), 5.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let a = SortedEigenValues::from_unsorted([2.0, -2.0, 0.0]);
        let b = SortedEigenValues::from_unsorted([-2.0, 2.0, 0.0]);
        assert_eq!(a.values(), &[0.0, 2.0, -2.0]);
        assert_eq!(b.values(), &[0.0, -2.0, 2.0]);
    }

    #[test]
    fn nan_does_not_panic() {
        let sorted = SortedEigenValues::from_unsorted([f64::NAN, 1.0, -3.0]);
        assert_eq!(sorted[0], 1.0);
        assert_eq!(sorted[1], -3.0);
        assert!(sorted[2].is_nan());
    }

    fn signed_multiset(values: &[f64]) -> Vec<u64> {
        let mut bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
        bits.sort_unstable();
        bits
    }

    proptest! {
        #[test]
        fn sorted_is_magnitude_ordered_permutation(
            values in prop::array::uniform4(-1.0e6f64..1.0e6)
        ) {
            let sorted = SortedEigenValues::from_unsorted(values);
            let out = sorted.values();
            for pair in out.windows(2) {
                prop_assert!(pair[0].abs() <= pair[1].abs());
            }
            prop_assert_eq!(signed_multiset(out), signed_multiset(&values));
        }

        #[test]
        fn sorting_is_idempotent(values in prop::array::uniform3(-50.0f64..50.0)) {
            let once = SortedEigenValues::from_unsorted(values);
            let twice = SortedEigenValues::from_unsorted(*once.values());
            prop_assert_eq!(once, twice);
        }
    }
}
