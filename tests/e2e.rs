mod common;

use common::synthetic_field::tube_and_blob;
use hessian_objectness::filter::AtomicProgress;
use hessian_objectness::image::{Domain, FieldView, HessianField, ScalarField};
use hessian_objectness::phantom::{GaussianStructure, Phantom};
use hessian_objectness::{compute_objectness, ObjectnessError, ObjectnessFilter, ObjectnessParams};

const SIZE: usize = 32;

#[test]
fn tube_filter_highlights_tube_core() {
    let _ = env_logger::builder().is_test(true).try_init();
    let phantom = tube_and_blob(SIZE, 2.0);
    let hessians: HessianField<f32, 3> = phantom.hessian_field();

    let filter = ObjectnessFilter::<3>::new(ObjectnessParams::new(1)).unwrap();
    let progress = AtomicProgress::new();
    let (response, report) = filter.process_with_progress::<f32, f32, _>(&hessians, &progress);

    assert_eq!(report.voxels, SIZE * SIZE * SIZE);
    assert_eq!(report.domain, vec![SIZE; 3]);
    assert_eq!(progress.count(), report.voxels as u64);
    assert_eq!(report.non_finite_responses, 0);
    assert!(report.rejected_voxels > 0);

    let core = *response.get(&[20, 16, 16]);
    let beside = *response.get(&[20, 16, 24]);
    let blob_center = *response.get(&[8, 8, 8]);
    assert!(core > 10.0, "tube core response too weak: {core}");
    assert!(
        beside < 0.01 * core,
        "response should vanish away from the tube: core={core} beside={beside}"
    );
    assert!(
        blob_center < 0.5 * core,
        "blob should score below the tube: core={core} blob={blob_center}"
    );
}

#[test]
fn blob_filter_prefers_blob_over_tube() {
    let _ = env_logger::builder().is_test(true).try_init();
    let phantom = tube_and_blob(SIZE, 2.0);
    let hessians: HessianField<f64, 3> = phantom.hessian_field();

    let response: ScalarField<f64, 3> =
        compute_objectness(&hessians, ObjectnessParams::new(0)).unwrap();
    let blob_center = *response.get(&[8, 8, 8]);
    let tube_core = *response.get(&[20, 16, 16]);
    assert!(blob_center > 1.0, "blob response too weak: {blob_center}");
    assert!(
        tube_core < 1e-6 * blob_center,
        "tube should not look like a blob: blob={blob_center} tube={tube_core}"
    );
}

#[test]
fn dark_tube_needs_dark_polarity() {
    let domain = Domain::new([24, 24, 24]);
    let hessians: HessianField<f32, 3> = Phantom::new(domain)
        .with_structure(GaussianStructure::tube(2, [12.0, 12.0, 0.0], 1.5, -80.0))
        .hessian_field();

    let bright: ScalarField<f32, 3> =
        compute_objectness(&hessians, ObjectnessParams::new(1)).unwrap();
    let dark: ScalarField<f32, 3> = compute_objectness(
        &hessians,
        ObjectnessParams::new(1).with_bright_object(false),
    )
    .unwrap();

    let core = [12, 12, 7];
    assert_eq!(*bright.get(&core), 0.0);
    assert!(*dark.get(&core) > 1.0);
}

#[test]
fn plate_filter_in_two_dimensions() {
    let domain = Domain::new([40, 30]);
    let hessians: HessianField<f64, 2> = Phantom::new(domain)
        .with_structure(GaussianStructure::plate(1, [0.0, 15.0], 1.5, 50.0))
        .hessian_field();
    let response: ScalarField<f64, 2> = compute_objectness(
        &hessians,
        ObjectnessParams::new(1).with_gamma(1.0),
    )
    .unwrap();
    let on_line = *response.get(&[20, 15]);
    let off_line = *response.get(&[20, 5]);
    assert!(on_line > 1.0, "on_line={on_line}");
    assert_eq!(off_line, 0.0);
}

#[test]
fn invalid_object_dimension_fails_before_processing() {
    let hessians: HessianField<f32, 3> = Phantom::new(Domain::new([4, 4, 4])).hessian_field();
    let result: Result<ScalarField<f32, 3>, _> =
        compute_objectness(&hessians, ObjectnessParams::new(3));
    assert_eq!(
        result.unwrap_err(),
        ObjectnessError::InvalidObjectDimension {
            object_dimension: 3,
            image_dimension: 3
        }
    );
}

#[test]
fn tube_in_four_dimensions() {
    let _ = env_logger::builder().is_test(true).try_init();
    let domain = Domain::new([12, 12, 12, 12]);
    let hessians: HessianField<f64, 4> = Phantom::new(domain)
        .with_structure(GaussianStructure::tube(0, [0.0, 6.0, 6.0, 6.0], 1.5, 50.0))
        .hessian_field();

    let as_tube: ScalarField<f64, 4> =
        compute_objectness(&hessians, ObjectnessParams::new(1)).unwrap();
    let as_sheet: ScalarField<f64, 4> =
        compute_objectness(&hessians, ObjectnessParams::new(2)).unwrap();

    let core = [6, 6, 6, 6];
    let tube_core = *as_tube.get(&core);
    let sheet_core = *as_sheet.get(&core);
    assert!(tube_core > 1.0, "tube core response too weak: {tube_core}");
    assert!(
        tube_core > 2.0 * sheet_core,
        "tube={tube_core} should beat the 2-d object score {sheet_core}"
    );
    // outside the core the radial curvature turns positive
    assert_eq!(*as_tube.get(&[6, 6, 6, 10]), 0.0);
}
