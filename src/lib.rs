#![doc = include_str!("../README.md")]

// Stable-ish public surface.
pub mod cloud;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod sink;
pub mod types;

// Stage-level modules – public for tools and tests, considered unstable
// internals.
pub mod config;
pub mod history;
pub mod plane;
pub mod reconstruct;
pub mod regions;
pub mod saliency;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DirtDetector, DirtParams};
pub use crate::types::{DetectionResult, DirtRegion};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Error surface for frame construction and config loading.
pub use crate::error::DetectError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use dirt_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 48usize);
/// let cloud = OrganizedPointCloud::new(
///     w,
///     h,
///     vec![None; w * h],
///     vec![[0u8; 3]; w * h],
/// )
/// .expect("buffer sizes match");
///
/// let mut detector = DirtDetector::new(DirtParams::default());
/// let report = detector.process_cloud(&cloud);
/// println!(
///     "floor={} regions={} latency_ms={:.3}",
///     report.result.floor_found,
///     report.result.regions.len(),
///     report.result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::cloud::OrganizedPointCloud;
    pub use crate::image::{ImageF32, ImageRgb8, Mask};
    pub use crate::{DetectionReport, DirtDetector, DirtParams, DirtRegion};
}
