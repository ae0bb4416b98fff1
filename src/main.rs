use hessian_objectness::image::{Domain, FieldView, HessianField, ScalarField};
use hessian_objectness::phantom::{GaussianStructure, Phantom};
use hessian_objectness::{compute_objectness, ObjectnessParams};

fn main() {
    // Demo stub: a bright tube along x in a small volume, scored as a tube
    let domain = Domain::new([48, 32, 32]);
    let phantom = Phantom::new(domain).with_structure(GaussianStructure::tube(
        0,
        [23.5, 16.0, 16.0],
        2.0,
        100.0,
    ));
    let hessians: HessianField<f32, 3> = phantom.hessian_field();

    match compute_objectness::<_, f32, _, 3>(&hessians, ObjectnessParams::new(1)) {
        Ok(response) => report(&response),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn report(response: &ScalarField<f32, 3>) {
    let on_axis = response.get(&[24, 16, 16]);
    let off_axis = response.get(&[24, 4, 4]);
    println!("on_axis={on_axis:.4} off_axis={off_axis:.4}");
}
