use nalgebra::SMatrix;

/// Eigenvalues of a real symmetric `D x D` tensor, in any order.
///
/// Implementations must be pure and cheap to share across worker threads: the
/// filter calls `eigenvalues` once per voxel from every region.
pub trait SymmetricEigenSolver<const D: usize>: Send + Sync {
    fn eigenvalues(&self, tensor: &SMatrix<f64, D, D>) -> [f64; D];
}

/// Solver backed by nalgebra's symmetric QR eigen-decomposition.
///
/// Only the lower triangle of the input is read.
#[derive(Clone, Copy, Debug, Default)]
pub struct NalgebraEigenSolver;

macro_rules! impl_nalgebra_solver {
    ($($dim:literal),*) => {
        $(
            impl SymmetricEigenSolver<$dim> for NalgebraEigenSolver {
                #[inline]
                fn eigenvalues(&self, tensor: &SMatrix<f64, $dim, $dim>) -> [f64; $dim] {
                    let ev = tensor.symmetric_eigenvalues();
                    std::array::from_fn(|i| ev[i])
                }
            }
        )*
    };
}

impl_nalgebra_solver!(2, 3, 4);
