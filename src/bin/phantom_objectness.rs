use hessian_objectness::config::load_config;
use hessian_objectness::config::phantom::PhantomToolConfig;
use hessian_objectness::diagnostics::ObjectnessReport;
use hessian_objectness::eigen::{NalgebraEigenSolver, SymmetricEigenSolver};
use hessian_objectness::filter::{AtomicProgress, ObjectnessFilter};
use hessian_objectness::image::io::{save_plane_png, write_json_file};
use hessian_objectness::image::{HessianField, ScalarField};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: PhantomToolConfig = load_config(Path::new(&config_path))?;
    match config.phantom.size.len() {
        2 => run_dim::<2>(&config),
        3 => run_dim::<3>(&config),
        4 => run_dim::<4>(&config),
        n => Err(format!("Unsupported image dimension {n} (expected 2, 3 or 4)")),
    }
}

fn run_dim<const D: usize>(config: &PhantomToolConfig) -> Result<(), String>
where
    NalgebraEigenSolver: SymmetricEigenSolver<D>,
{
    let phantom = config.phantom.build::<D>()?;
    let hessians: HessianField<f32, D> = phantom.hessian_field();

    let filter = ObjectnessFilter::<D>::new(config.objectness)
        .map_err(|e| e.to_string())?
        .with_parallel(config.execution.to_parallel_options());
    let progress = AtomicProgress::new();
    let (response, report): (ScalarField<f32, D>, _) =
        filter.process_with_progress(&hessians, &progress);

    let mid_plane = phantom.domain.size().map(|s| s / 2);
    if let Some(path) = &config.output.response_png {
        save_plane_png(&response, mid_plane, path)?;
        println!("Saved response plane to {}", path.display());
    }
    if let Some(path) = &config.output.intensity_png {
        let intensity: ScalarField<f32, D> = phantom.intensity_field();
        save_plane_png(&intensity, mid_plane, path)?;
        println!("Saved phantom plane to {}", path.display());
    }

    let summary = RunSummary {
        image_dimension: D,
        structures: phantom.structures.len(),
        peak_response: response.max_finite().unwrap_or(0.0),
        progress_units: progress.count(),
        report,
    };
    print_text_summary(&summary);
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &summary)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(summary: &RunSummary) {
    let report = &summary.report;
    println!(
        "{}D phantom {:?}: {} structure(s), {} voxels in {} region(s) (parallel={})",
        summary.image_dimension,
        report.domain,
        summary.structures,
        report.voxels,
        report.regions,
        report.parallel
    );
    println!(
        "peak response {:.4}, rejected {:.1}%, non-finite {}",
        summary.peak_response,
        100.0 * report.rejected_ratio(),
        report.non_finite_responses
    );
    for stage in &report.timings.stages {
        println!("  {:<10} {:>9.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  {:<10} {:>9.3} ms", "total", report.timings.total_ms);
}

fn usage() -> String {
    "Usage: phantom_objectness <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    image_dimension: usize,
    structures: usize,
    peak_response: f64,
    progress_units: u64,
    report: ObjectnessReport,
}
