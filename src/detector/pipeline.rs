//! Frame orchestrator sequencing plane fit, reconstruction, saliency and
//! region extraction.
//!
//! Typical usage:
//! ```no_run
//! use dirt_detector::{DirtDetector, DirtParams};
//! use dirt_detector::cloud::OrganizedPointCloud;
//!
//! # fn example(cloud: OrganizedPointCloud) {
//! let mut detector = DirtDetector::new(DirtParams::default());
//! let report = detector.process_cloud(&cloud);
//! println!("{} regions in {:.2} ms", report.result.regions.len(), report.result.latency_ms);
//! # }
//! ```

use std::time::Instant;

use log::debug;

use super::params::DirtParams;
use crate::cloud::OrganizedPointCloud;
use crate::diagnostics::{
    DetectionReport, InputDescriptor, InputKind, PipelineTrace, PlaneStage, ReconstructionStage,
    RegionStage, SaliencyStage, TimingBreakdown,
};
use crate::image::{ImageF32, ImageRgb8};
use crate::plane::extract_plane;
use crate::reconstruct::{reconstruct_floor, reconstruct_full};
use crate::regions::extract_regions;
use crate::saliency::SaliencyEngine;
use crate::sink::{Artifact, ArtifactSink};
use crate::types::DetectionResult;

/// Dirt detector orchestrating the per-frame pipeline. Stateless across
/// frames apart from its read-only parameters, so independent frames could
/// run on separate workers without synchronization.
pub struct DirtDetector {
    params: DirtParams,
    engine: SaliencyEngine,
    sink: Option<Box<dyn ArtifactSink>>,
}

impl DirtDetector {
    /// Create a detector with the supplied parameters and no sink.
    pub fn new(params: DirtParams) -> Self {
        let engine = SaliencyEngine::new(params.saliency.clone());
        Self {
            params,
            engine,
            sink: None,
        }
    }

    /// Attach a visualization sink. Artifacts are published as they are
    /// produced; the numeric results do not depend on the sink.
    pub fn with_sink(params: DirtParams, sink: Box<dyn ArtifactSink>) -> Self {
        let mut detector = Self::new(params);
        detector.sink = Some(sink);
        detector
    }

    /// Full pipeline on one organized cloud frame: plane fit, floor
    /// reconstruction, masked saliency, region extraction.
    pub fn process_cloud(&mut self, cloud: &OrganizedPointCloud) -> DetectionReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            width: cloud.width(),
            height: cloud.height(),
            kind: InputKind::PointCloud,
        };

        if cloud.is_empty() {
            return Self::empty_report(input, timings, total_start, false);
        }

        let stage_start = Instant::now();
        let model = extract_plane(cloud, &self.params.plane);
        timings.push("plane", elapsed_ms(stage_start));

        let Some(model) = model else {
            debug!("process_cloud: no floor plane, skipping downstream stages");
            return Self::empty_report(input, timings, total_start, false);
        };
        let plane_stage = PlaneStage {
            coefficients: model.coefficients,
            inlier_count: model.inliers.len(),
            valid_points: cloud.valid_points().count(),
        };

        let stage_start = Instant::now();
        let (floor_image, mask) = reconstruct_floor(cloud, &model.inliers);
        timings.push("reconstruct", elapsed_ms(stage_start));
        if let Some(sink) = self.sink.as_mut() {
            let full = reconstruct_full(cloud);
            sink.publish(Artifact::FullImage(&full));
            sink.publish(Artifact::FloorImage(&floor_image));
        }

        let stage_start = Instant::now();
        let map = self.engine.saliency_color(&floor_image, Some(&mask));
        timings.push("saliency", elapsed_ms(stage_start));
        if let Some(sink) = self.sink.as_mut() {
            sink.publish(Artifact::SaliencyMap(&map));
        }

        let (regions, region_stage) = self.extract_and_publish(&map, &mut timings);

        let total_ms = elapsed_ms(total_start);
        timings.total_ms = total_ms;
        DetectionReport {
            result: DetectionResult {
                floor_found: true,
                regions,
                latency_ms: total_ms,
            },
            trace: PipelineTrace {
                input,
                timings,
                plane: Some(plane_stage),
                reconstruction: Some(ReconstructionStage {
                    mask_pixels: mask.count_nonzero(),
                }),
                saliency: Some(SaliencyStage {
                    working_size: self.engine.working_size(),
                    masked: true,
                }),
                regions: Some(region_stage),
            },
        }
    }

    /// Direct single-image mode: unmasked saliency plus region extraction,
    /// bypassing plane fit and reconstruction.
    pub fn process_image(&mut self, image: &ImageRgb8) -> DetectionReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            width: image.w,
            height: image.h,
            kind: InputKind::ColorImage,
        };

        if image.is_empty() {
            return Self::empty_report(input, timings, total_start, true);
        }

        let stage_start = Instant::now();
        let map = self.engine.saliency_color(image, None);
        timings.push("saliency", elapsed_ms(stage_start));
        if let Some(sink) = self.sink.as_mut() {
            sink.publish(Artifact::SaliencyMap(&map));
        }

        let (regions, region_stage) = self.extract_and_publish(&map, &mut timings);

        let total_ms = elapsed_ms(total_start);
        timings.total_ms = total_ms;
        DetectionReport {
            result: DetectionResult {
                floor_found: true,
                regions,
                latency_ms: total_ms,
            },
            trace: PipelineTrace {
                input,
                timings,
                plane: None,
                reconstruction: None,
                saliency: Some(SaliencyStage {
                    working_size: self.engine.working_size(),
                    masked: false,
                }),
                regions: Some(region_stage),
            },
        }
    }

    /// Saliency map of a color image without region extraction, for callers
    /// that only want the map.
    pub fn analyze_image(&self, image: &ImageRgb8) -> ImageF32 {
        self.engine.saliency_color(image, None)
    }

    pub fn params(&self) -> &DirtParams {
        &self.params
    }

    fn extract_and_publish(
        &mut self,
        map: &ImageF32,
        timings: &mut TimingBreakdown,
    ) -> (Vec<crate::types::DirtRegion>, RegionStage) {
        let stage_start = Instant::now();
        let regions = extract_regions(map, &self.params.regions);
        timings.push("regions", elapsed_ms(stage_start));
        if let Some(sink) = self.sink.as_mut() {
            sink.publish(Artifact::Regions {
                width: map.w,
                height: map.h,
                regions: &regions,
            });
        }
        let stage = RegionStage {
            emitted: regions.len(),
        };
        (regions, stage)
    }

    fn empty_report(
        input: InputDescriptor,
        mut timings: TimingBreakdown,
        total_start: Instant,
        floor_found: bool,
    ) -> DetectionReport {
        let total_ms = elapsed_ms(total_start);
        timings.total_ms = total_ms;
        DetectionReport {
            result: DetectionResult {
                floor_found,
                regions: Vec::new(),
                latency_ms: total_ms,
            },
            trace: PipelineTrace {
                input,
                timings,
                plane: None,
                reconstruction: None,
                saliency: None,
                regions: None,
            },
        }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
