//! I/O helpers for inspecting responses and writing reports.
//!
//! - `save_plane_png`: write one axis-0/axis-1 plane of a scalar field as an
//!   8-bit PNG, normalised to the field's maximum.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Sample, ScalarField};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save the plane spanned by axes 0 and 1 that passes through `fixed`.
///
/// Entries of `fixed` for axes 0 and 1 are ignored. Values are scaled by the
/// largest finite sample of the whole field so planes of the same run share a
/// common intensity scale; negative and non-finite samples map to black.
pub fn save_plane_png<T: Sample, const D: usize>(
    field: &ScalarField<T, D>,
    fixed: [usize; D],
    path: &Path,
) -> Result<(), String> {
    if D < 2 {
        return Err(format!(
            "Cannot save a plane of a {D}-dimensional field to {}",
            path.display()
        ));
    }
    let size = field.domain().size();
    for axis in 2..D {
        if fixed[axis] >= size[axis] {
            return Err(format!(
                "Plane index {} on axis {axis} is outside the domain {:?}",
                fixed[axis], size
            ));
        }
    }
    ensure_parent_dir(path)?;

    let peak = field.max_finite().filter(|m| *m > 0.0).unwrap_or(1.0);
    let (w, h) = (size[0], size[1]);
    let mut out = GrayImage::new(w as u32, h as u32);
    let mut index = fixed;
    for y in 0..h {
        index[1] = y;
        for x in 0..w {
            index[0] = x;
            let v = field.data()[field.domain().offset(&index)].to_f64() / peak;
            let v = if v.is_finite() { v * 255.0 } else { 0.0 };
            out.put_pixel(x as u32, y as u32, Luma([v.clamp(0.0, 255.0) as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
