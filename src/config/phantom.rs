use crate::filter::ParallelOptions;
use crate::image::Domain;
use crate::objectness::ObjectnessParams;
use crate::phantom::{GaussianStructure, Phantom};
use serde::Deserialize;
use std::path::PathBuf;

/// Config of the `phantom_objectness` tool.
#[derive(Debug, Deserialize)]
pub struct PhantomToolConfig {
    pub phantom: PhantomConfig,
    #[serde(default)]
    pub objectness: ObjectnessParams,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub output: PhantomOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct PhantomConfig {
    /// Voxels per axis; its length selects the image dimension (2, 3 or 4).
    pub size: Vec<usize>,
    pub structures: Vec<StructureConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureConfig {
    Blob {
        #[serde(default)]
        center: Option<Vec<f64>>,
        sigma: f64,
        amplitude: f64,
    },
    Tube {
        axis: usize,
        #[serde(default)]
        center: Option<Vec<f64>>,
        sigma: f64,
        amplitude: f64,
    },
    Plate {
        normal_axis: usize,
        #[serde(default)]
        center: Option<Vec<f64>>,
        sigma: f64,
        amplitude: f64,
    },
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub parallel: bool,
    /// Number of regions; `None` derives it from the thread pool.
    pub regions: Option<usize>,
    pub min_voxels_for_parallel: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            regions: None,
            min_voxels_for_parallel: 4096,
        }
    }
}

impl ExecutionConfig {
    pub fn to_parallel_options(&self) -> ParallelOptions {
        let opts = ParallelOptions::new(self.parallel, self.min_voxels_for_parallel);
        match self.regions {
            Some(n) => opts.with_regions(n),
            None => opts,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PhantomOutputConfig {
    /// PNG of the central axis-0/axis-1 plane of the response.
    pub response_png: Option<PathBuf>,
    /// PNG of the same plane of the phantom intensities.
    pub intensity_png: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

impl PhantomConfig {
    /// Instantiate the phantom for a `D`-dimensional domain.
    pub fn build<const D: usize>(&self) -> Result<Phantom<D>, String> {
        let size: [usize; D] = self.size.as_slice().try_into().map_err(|_| {
            format!(
                "Phantom size has {} axes, expected {D}",
                self.size.len()
            )
        })?;
        let mut phantom = Phantom::new(Domain::new(size));
        let default_center = phantom.center();
        for (i, structure) in self.structures.iter().enumerate() {
            let built = structure.build::<D>(default_center).map_err(|e| format!("structure {i}: {e}"))?;
            phantom.structures.push(built);
        }
        Ok(phantom)
    }
}

impl StructureConfig {
    fn build<const D: usize>(&self, default_center: [f64; D]) -> Result<GaussianStructure<D>, String> {
        let (center, sigma) = match self {
            Self::Blob { center, sigma, .. }
            | Self::Tube { center, sigma, .. }
            | Self::Plate { center, sigma, .. } => (center, *sigma),
        };
        if !(sigma > 0.0) {
            return Err(format!("sigma must be positive, got {sigma}"));
        }
        let center = match center {
            Some(c) => c
                .as_slice()
                .try_into()
                .map_err(|_| format!("center has {} coordinates, expected {D}", c.len()))?,
            None => default_center,
        };
        let check_axis = |axis: usize| {
            if axis < D {
                Ok(axis)
            } else {
                Err(format!("axis {axis} out of range for {D} dimensions"))
            }
        };
        Ok(match self {
            Self::Blob { amplitude, .. } => GaussianStructure::blob(center, sigma, *amplitude),
            Self::Tube {
                axis, amplitude, ..
            } => GaussianStructure::tube(check_axis(*axis)?, center, sigma, *amplitude),
            Self::Plate {
                normal_axis,
                amplitude,
                ..
            } => GaussianStructure::plate(check_axis(*normal_axis)?, center, sigma, *amplitude),
        })
    }
}
