use hessian_objectness::image::{Domain, Field, HessianField};
use hessian_objectness::phantom::{GaussianStructure, Phantom};
use nalgebra::Matrix3;
use rand::prelude::*;

/// Random symmetric tensors with a sprinkling of exact zeros and repeated
/// eigenvalues, the inputs most likely to expose ordering differences.
pub fn random_hessians(domain: Domain<3>, seed: u64) -> HessianField<f64, 3> {
    let mut rng = StdRng::seed_from_u64(seed);
    Field::from_fn(domain, |_| {
        let pick: f64 = rng.random_range(0.0..1.0);
        if pick < 0.1 {
            Matrix3::zeros()
        } else if pick < 0.2 {
            Matrix3::from_diagonal_element(rng.random_range(-4.0..4.0))
        } else {
            let mut m = Matrix3::from_fn(|_, _| rng.random_range(-10.0..10.0));
            m = (m + m.transpose()) * 0.5;
            m
        }
    })
}

/// Bright tube along axis 0 through voxel row `(x, size/2, size/2)` plus a
/// bright blob centred at `size/4` on every axis.
pub fn tube_and_blob(size: usize, sigma: f64) -> Phantom<3> {
    let domain = Domain::new([size; 3]);
    let mid = (size / 2) as f64;
    let quarter = size as f64 * 0.25;
    Phantom::new(domain)
        .with_structure(GaussianStructure::tube(0, [mid, mid, mid], sigma, 100.0))
        .with_structure(GaussianStructure::blob(
            [quarter, quarter, quarter],
            sigma,
            100.0,
        ))
}
