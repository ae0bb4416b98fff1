//! Eigen-analysis of per-voxel Hessian tensors.
//!
//! - [`SymmetricEigenSolver`] is the seam to the numeric decomposition; the
//!   default [`NalgebraEigenSolver`] covers 2-, 3- and 4-dimensional images.
//! - [`SortedEigenValues`] orders the raw spectrum by magnitude while keeping
//!   signs, which is the form the objectness terms consume.

pub mod solver;
pub mod sort;

pub use solver::{NalgebraEigenSolver, SymmetricEigenSolver};
pub use sort::SortedEigenValues;
