use super::*;
use proptest::prelude::*;

fn tube_params() -> ObjectnessParams {
    ObjectnessParams::new(1)
        .with_alpha(0.5)
        .with_beta(0.5)
        .with_gamma(0.0)
        .with_scale_by_largest_eigenvalue(false)
}

fn measure3(params: ObjectnessParams) -> ObjectnessMeasure<3> {
    ObjectnessMeasure::new(params).expect("valid params")
}

#[test]
fn object_dimension_must_be_below_image_dimension() {
    let err = ObjectnessMeasure::<3>::new(ObjectnessParams::new(3)).unwrap_err();
    assert_eq!(
        err,
        ObjectnessError::InvalidObjectDimension {
            object_dimension: 3,
            image_dimension: 3
        }
    );
    assert!(ObjectnessMeasure::<3>::new(ObjectnessParams::new(2)).is_ok());
    assert!(ObjectnessMeasure::<2>::new(ObjectnessParams::new(2)).is_err());
}

#[test]
fn positive_background_curvature_rejects_bright_tube() {
    // sorted: (-2, 3, -5), background direction 3 > 0
    let measure = measure3(tube_params());
    let sorted = SortedEigenValues::from_unsorted([-5.0, 3.0, -2.0]);
    assert_eq!(measure.try_evaluate(&sorted), None);
    assert_eq!(measure.evaluate(&sorted), 0.0);
}

#[test]
fn positive_smallest_eigenvalue_rejects_bright_blob() {
    // sorted: (2, -3, -5); for blobs every direction is background
    let measure = measure3(ObjectnessParams::new(0).with_bright_object(true));
    assert_eq!(measure.evaluate_eigenvalues([-5.0, -3.0, 2.0]), 0.0);
}

#[test]
fn same_spectrum_passes_tube_gate_because_sorting_moves_positive_value_to_axis() {
    let measure = measure3(tube_params());
    assert!(measure.evaluate_eigenvalues([-5.0, -3.0, 2.0]) > 0.0);
}

#[test]
fn zero_alpha_makes_confinement_neutral() {
    let eigen = [0.1, -2.0, -3.0];
    let neutral = measure3(tube_params().with_alpha(0.0)).evaluate_eigenvalues(eigen);
    let tiny = measure3(tube_params().with_alpha(1e-6)).evaluate_eigenvalues(eigen);
    let regular = measure3(tube_params()).evaluate_eigenvalues(eigen);

    let anisotropy_only = {
        let rb = 0.1 / (2.0f64 * 3.0).sqrt();
        (-0.5 * rb * rb / 0.25).exp()
    };
    assert!((neutral - anisotropy_only).abs() < 1e-12);
    assert!((neutral - tiny).abs() < 1e-12);
    assert!(regular < neutral);
}

#[test]
fn zero_beta_forces_zero_for_tubes_only() {
    let eigen = [0.1, -2.0, -3.0];
    assert_eq!(
        measure3(tube_params().with_beta(0.0)).evaluate_eigenvalues(eigen),
        0.0
    );
    let blob = ObjectnessParams::new(0).with_beta(0.0).with_gamma(0.0);
    assert!(measure3(blob).evaluate_eigenvalues([-1.0, -2.0, -3.0]) > 0.0);
}

#[test]
fn zero_second_eigenvalue_degenerates_blob_response() {
    let measure = measure3(ObjectnessParams::new(0).with_gamma(0.0));
    for largest in [-0.5, -4.0, -100.0] {
        let sorted = SortedEigenValues::from_unsorted([0.0, 0.0, largest]);
        assert_eq!(sorted[1], 0.0);
        assert_eq!(measure.try_evaluate(&sorted), None);
    }
}

#[test]
fn plate_response_uses_only_anisotropy_and_noise_terms() {
    let params = ObjectnessParams::new(2)
        .with_alpha(0.0)
        .with_beta(0.5)
        .with_gamma(0.0)
        .with_scale_by_largest_eigenvalue(false);
    let value = measure3(params).evaluate_eigenvalues([0.01, 0.02, -4.0]);
    let rb = 0.02 / 4.0;
    let expected = (-0.5 * rb * rb / 0.25f64).exp();
    assert!((value - expected).abs() < 1e-12);
}

#[test]
fn dark_tube_scenario_is_attenuated_by_gamma() {
    let params = ObjectnessParams::new(1)
        .with_alpha(0.5)
        .with_beta(0.5)
        .with_gamma(0.5)
        .with_bright_object(false)
        .with_scale_by_largest_eigenvalue(false);
    let eigen = [1.0, 8.0, 9.0];
    let with_gamma = measure3(params).evaluate_eigenvalues(eigen);
    let without_gamma = measure3(params.with_gamma(0.0)).evaluate_eigenvalues(eigen);
    let wide_gamma = measure3(params.with_gamma(20.0)).evaluate_eigenvalues(eigen);

    assert!(with_gamma > 0.7 && with_gamma < 0.85, "got {with_gamma}");
    assert!(with_gamma <= without_gamma);
    assert!(wide_gamma < without_gamma);
    assert!(wide_gamma > 0.0);
}

#[test]
fn bright_tube_profile_rejected_for_dark_polarity() {
    let dark = measure3(tube_params().with_bright_object(false));
    assert_eq!(dark.evaluate_eigenvalues([0.0, -3.0, -3.0]), 0.0);
    assert!(dark.evaluate_eigenvalues([0.0, 3.0, 3.0]) > 0.0);
}

#[test]
fn scaling_multiplies_by_largest_magnitude() {
    let eigen = [0.2, -3.0, -4.0];
    let plain = measure3(tube_params().with_gamma(1.0)).evaluate_eigenvalues(eigen);
    let scaled = measure3(
        tube_params()
            .with_gamma(1.0)
            .with_scale_by_largest_eigenvalue(true),
    )
    .evaluate_eigenvalues(eigen);
    assert!((scaled - 4.0 * plain).abs() < 1e-12);
}

#[test]
fn two_dimensional_vessel() {
    let measure = ObjectnessMeasure::<2>::new(tube_params().with_gamma(1.0)).unwrap();
    let line = measure.evaluate_eigenvalues([-2.0, 0.05]);
    let blob = measure.evaluate_eigenvalues([-2.0, -2.0]);
    assert!(line > blob, "line={line} blob={blob}");
}

#[test]
fn nan_eigenvalue_does_not_panic() {
    let measure = measure3(ObjectnessParams::default());
    let _ = measure.evaluate_eigenvalues([f64::NAN, -1.0, -2.0]);
    let _ = measure.evaluate_eigenvalues([f64::INFINITY, -1.0, -2.0]);
}

proptest! {
    #[test]
    fn response_without_rescaling_is_scale_invariant(
        small in 0.0f64..0.5,
        mid in 1.0f64..4.0,
        extra in 0.0f64..4.0,
        k in 0.05f64..20.0,
    ) {
        let measure = measure3(tube_params());
        let eigen = [small, -mid, -(mid + extra)];
        let base = measure.evaluate_eigenvalues(eigen);
        let scaled = measure.evaluate_eigenvalues(eigen.map(|v| v * k));
        prop_assert!((0.0..=1.0).contains(&base));
        prop_assert!((base - scaled).abs() <= 1e-9);
    }

    #[test]
    fn rescaled_response_is_linear_in_contrast(
        small in 0.0f64..0.5,
        mid in 1.0f64..4.0,
        extra in 0.0f64..4.0,
        k in 0.05f64..20.0,
    ) {
        let measure = measure3(tube_params().with_scale_by_largest_eigenvalue(true));
        let eigen = [small, -mid, -(mid + extra)];
        let base = measure.evaluate_eigenvalues(eigen);
        let scaled = measure.evaluate_eigenvalues(eigen.map(|v| v * k));
        prop_assert!((scaled - k * base).abs() <= 1e-9 * (1.0 + k * base));
    }
}
