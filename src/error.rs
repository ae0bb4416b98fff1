use thiserror::Error;

/// Errors raised before any voxel is processed.
///
/// Per-voxel degeneracies never surface here: they are encoded as a zero
/// response and only show up as aggregate counts in the run report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectnessError {
    #[error("object dimension {object_dimension} must be lower than the image dimension {image_dimension}")]
    InvalidObjectDimension {
        object_dimension: usize,
        image_dimension: usize,
    },
    #[error("output domain {found:?} does not match input domain {expected:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("buffer holds {found} voxels but the domain needs {expected}")]
    DataLength { expected: usize, found: usize },
}
