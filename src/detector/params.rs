//! Parameter types configuring the detector stages.
//!
//! Process-wide, read-only after startup. Defaults: plane tolerance 0.02
//! over 100 iterations, a 64×64 spectral working image, binarization at 0.5
//! and a 1/20 border margin.

use crate::plane::PlaneParams;
use crate::regions::RegionParams;
use crate::saliency::SaliencyParams;

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Default)]
pub struct DirtParams {
    /// Consensus plane fit over the organized cloud.
    pub plane: PlaneParams,
    /// Spectral-residual saliency and its masking/normalization policies.
    pub saliency: SaliencyParams,
    /// Threshold and blob extraction over the normalized map.
    pub regions: RegionParams,
}
