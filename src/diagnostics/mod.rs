//! Diagnostics data model exposed by the detector.
//!
//! `DetectionReport` bundles the frame result with a `PipelineTrace`
//! describing every stage that executed, including per-stage timings. All of
//! it serializes to JSON for offline inspection.

use crate::types::DetectionResult;
use serde::Serialize;

/// Result produced by [`DirtDetector::process_cloud`](crate::DirtDetector)
/// and [`DirtDetector::process_image`](crate::DirtDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: DetectionResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace of the frame. Stages that were skipped (no plane found,
/// empty frame) stay `None`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconstruction: Option<ReconstructionStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saliency: Option<SaliencyStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<RegionStage>,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    PointCloud,
    ColorImage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub kind: InputKind,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneStage {
    pub coefficients: [f32; 4],
    pub inlier_count: usize,
    pub valid_points: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructionStage {
    pub mask_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaliencyStage {
    pub working_size: usize,
    pub masked: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStage {
    pub emitted: usize,
}

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Aggregated timing trace for the frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }
}
