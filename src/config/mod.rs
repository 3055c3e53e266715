//! JSON tool configuration for the demo binary.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::detector::DirtParams;
use crate::error::{DetectError, Result};
use crate::plane::PlaneParams;
use crate::regions::RegionParams;
use crate::saliency::SaliencyParams;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorToolConfig {
    pub plane: PlaneConfig,
    pub saliency: SaliencyConfig,
    pub regions: RegionParams,
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaneConfig {
    pub distance_threshold: f32,
    pub max_iterations: usize,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        let p = PlaneParams::default();
        Self {
            distance_threshold: p.distance_threshold,
            max_iterations: p.max_iterations,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaliencyConfig {
    pub scale: u32,
    pub blur_passes: usize,
    pub mask_dilate_iterations: usize,
    pub mask_erode_iterations: usize,
    pub border_divisor: usize,
}

impl Default for SaliencyConfig {
    fn default() -> Self {
        let p = SaliencyParams::default();
        Self {
            scale: p.scale,
            blur_passes: p.blur_passes,
            mask_dilate_iterations: p.mask_dilate_iterations,
            mask_erode_iterations: p.mask_erode_iterations,
            border_divisor: p.border_divisor,
        }
    }
}

impl DetectorToolConfig {
    /// Materialize detector parameters from the parsed configuration.
    pub fn params(&self) -> DirtParams {
        DirtParams {
            plane: PlaneParams {
                distance_threshold: self.plane.distance_threshold,
                max_iterations: self.plane.max_iterations,
            },
            saliency: SaliencyParams {
                scale: self.saliency.scale,
                blur_passes: self.saliency.blur_passes,
                mask_dilate_iterations: self.saliency.mask_dilate_iterations,
                mask_erode_iterations: self.saliency.mask_erode_iterations,
                border_divisor: self.saliency.border_divisor,
            },
            regions: self.regions.clone(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<DetectorToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| {
        DetectError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&data).map_err(|e| {
        DetectError::Config(format!("failed to parse {}: {e}", path.display()))
    })
}
