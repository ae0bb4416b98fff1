//! Individual factors of the objectness measure.
//!
//! Every term returns the multiplicative factor it contributes, or `None` when
//! it forces the whole response to zero. `m` is the object dimension and the
//! magnitude arrays are ascending.
use crate::eigen::SortedEigenValues;

/// Rejects voxels whose cross-sectional curvatures have the wrong sign.
///
/// Directions `m..D` must curve downwards (`<= 0`) around bright objects and
/// upwards (`>= 0`) around dark ones.
#[inline]
pub(crate) fn sign_gate<const D: usize>(
    sorted: &SortedEigenValues<D>,
    m: usize,
    bright_object: bool,
) -> Option<()> {
    let violated = sorted.values()[m..].iter().any(|&v| {
        if bright_object {
            v > 0.0
        } else {
            v < 0.0
        }
    });
    (!violated).then_some(())
}

/// Confinement of `|λ_m|` relative to the geometric mean of the larger
/// magnitudes. Neutral for plates (`m == D-1`) and when `alpha == 0`; a zero
/// curvature among the larger magnitudes forces zero.
#[inline]
pub(crate) fn confinement<const D: usize>(abs: &[f64; D], m: usize, alpha: f64) -> Option<f64> {
    if m + 1 >= D {
        return Some(1.0);
    }
    let denominator: f64 = abs[m + 1..].iter().product();
    if denominator == 0.0 {
        return None;
    }
    if alpha == 0.0 {
        return Some(1.0);
    }
    let ra = abs[m] / denominator.powf(1.0 / (D - m - 1) as f64);
    Some(1.0 - (-0.5 * ra * ra / (alpha * alpha)).exp())
}

/// Rejects leakage along the object's own directions: `|λ_{m-1}|` must stay
/// small against the geometric mean of `|λ_m..|`. Neutral for blobs; a zero
/// denominator or `beta == 0` forces zero.
#[inline]
pub(crate) fn anisotropy<const D: usize>(abs: &[f64; D], m: usize, beta: f64) -> Option<f64> {
    if m == 0 {
        return Some(1.0);
    }
    let denominator: f64 = abs[m..].iter().product();
    if denominator == 0.0 || beta == 0.0 {
        return None;
    }
    let rb = abs[m - 1] / denominator.powf(1.0 / (D - m) as f64);
    Some((-0.5 * rb * rb / (beta * beta)).exp())
}

/// Suppresses low-contrast voxels using the Frobenius norm of the spectrum.
#[inline]
pub(crate) fn noise_floor<const D: usize>(abs: &[f64; D], gamma: f64) -> f64 {
    if gamma == 0.0 {
        return 1.0;
    }
    let frobenius_sq: f64 = abs.iter().map(|v| v * v).sum();
    1.0 - (-0.5 * frobenius_sq / (gamma * gamma)).exp()
}

#[inline]
pub(crate) fn scale_compensation<const D: usize>(
    sorted: &SortedEigenValues<D>,
    enabled: bool,
) -> f64 {
    if enabled {
        sorted.largest_magnitude()
    } else {
        1.0
    }
}
