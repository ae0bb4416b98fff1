//! User-facing parameters of the objectness measure.
//!
//! Defaults follow the classic Frangi-style settings for bright tubes:
//! `alpha = beta = 0.5`, `gamma = 5`, rescaled by the largest eigenvalue.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of the objectness measure, independent of the image dimension.
///
/// Validated against a concrete dimension by
/// [`ObjectnessMeasure::new`](super::ObjectnessMeasure::new).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectnessParams {
    /// Intrinsic dimension of the sought structure: 0 blob, 1 tube, `D-1` plate.
    pub object_dimension: usize,
    /// Sensitivity of the confinement term (deviation from the hyperplane
    /// orthogonal to the object).
    pub alpha: f64,
    /// Sensitivity of the anisotropy-rejection term (blobness deviation).
    pub beta: f64,
    /// Noise floor of the structureness term; `0` disables it.
    pub gamma: f64,
    /// Look for structures brighter (`true`) or darker than the background.
    pub bright_object: bool,
    /// Multiply the response by the largest eigenvalue magnitude.
    pub scale_by_largest_eigenvalue: bool,
}

impl Default for ObjectnessParams {
    fn default() -> Self {
        Self {
            object_dimension: 1,
            alpha: 0.5,
            beta: 0.5,
            gamma: 5.0,
            bright_object: true,
            scale_by_largest_eigenvalue: true,
        }
    }
}

impl ObjectnessParams {
    pub fn new(object_dimension: usize) -> Self {
        Self {
            object_dimension,
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_bright_object(mut self, bright_object: bool) -> Self {
        self.bright_object = bright_object;
        self
    }

    pub fn with_scale_by_largest_eigenvalue(mut self, enabled: bool) -> Self {
        self.scale_by_largest_eigenvalue = enabled;
        self
    }
}

impl fmt::Display for ObjectnessParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "objectDimension={} alpha={} beta={} gamma={} brightObject={} scaleByLargestEigenvalue={}",
            self.object_dimension,
            self.alpha,
            self.beta,
            self.gamma,
            self.bright_object,
            self.scale_by_largest_eigenvalue
        )
    }
}
